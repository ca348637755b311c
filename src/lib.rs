//! # grna-finder
//!
//! CRISPR 向导 RNA（gRNA）候选位点查找。
//!
//! 在 DNA 序列的正义链与反义链上查找紧邻 NGG PAM 上游的 20 nt spacer，
//! 按组成质量过滤，并以稳定顺序返回：
//!
//! - **规范化**：FASTA 文本 → 大写 ACGT 序列（格式 / 字母表 / 长度校验）
//! - **PAM 扫描**：逐位重叠窗口扫描两条链
//! - **过滤**：单碱基重复、AT/GC 二核苷酸交替、GC 含量 [40, 60]
//! - **坐标映射**：反义链命中映射回正义链 1-based 坐标
//! - **排序**：正义链在前，其后按起点升序
//!
//! ## 快速示例
//!
//! ```rust
//! use grna_finder::guide::{find_guides, Strand};
//!
//! let fasta = ">demo\nGACCTTAGCAATCGTACAGTAGGTTTTTTTTTT\n";
//! let guides = find_guides(fasta).unwrap();
//! assert_eq!(guides[0].strand, Strand::Sense);
//! assert_eq!(guides[0].spacer, "GACCTTAGCAATCGTACAGT");
//! assert_eq!((guides[0].start_position, guides[0].end_position), (1, 22));
//! ```
//!
//! ## 模块说明
//!
//! - [`guide`] — 扫描流水线（规范化、链、PAM、过滤、坐标、排序、观察者）
//! - [`io`] — FASTA 解析
//! - [`score`] — 外部打分工具的接口约定
//! - [`output`] — TSV / JSON 输出
//! - [`util`] — 碱基互补、反向互补、GC 含量等工具函数

pub mod error;
pub mod guide;
pub mod io;
pub mod output;
pub mod score;
pub mod util;

pub use error::{GuideError, Result};
