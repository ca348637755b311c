use super::pam::WINDOW_LEN;
use super::strand::Strand;

/// 将链上的窗口起点（0-based）映射为正义链上的 1-based 闭区间 `(start, end)`。
///
/// 反义链是反向互补链，靠近其起点的窗口对应原序列末端附近的窗口。
/// `seq_len` 为原始正义序列长度（与反义链等长）。
#[inline]
pub fn to_sense_coords(strand: Strand, window_start: usize, seq_len: usize) -> (usize, usize) {
    match strand {
        Strand::Sense => (window_start + 1, window_start + WINDOW_LEN),
        Strand::Antisense => (seq_len - window_start - WINDOW_LEN + 1, seq_len - window_start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sense_window_zero() {
        assert_eq!(to_sense_coords(Strand::Sense, 0, 43), (1, 22));
        assert_eq!(to_sense_coords(Strand::Sense, 10, 43), (11, 32));
    }

    #[test]
    fn antisense_window_zero_ends_at_sequence_end() {
        let l = 43;
        assert_eq!(to_sense_coords(Strand::Antisense, 0, l), (l - 21, l));
    }

    #[test]
    fn antisense_last_window() {
        // last scannable antisense offset: i + 23 == L
        let l = 30;
        let i = l - 23;
        assert_eq!(to_sense_coords(Strand::Antisense, i, l), (2, 23));
    }

    #[test]
    fn span_is_constant() {
        for strand in [Strand::Sense, Strand::Antisense] {
            for i in 0..10 {
                let (s, e) = to_sense_coords(strand, i, 40);
                assert_eq!(e - s, 21);
            }
        }
    }
}
