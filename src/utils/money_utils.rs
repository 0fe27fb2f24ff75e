//! # 금액 유틸리티
//!
//! API는 금액을 소수(`49.5`)로 주고받지만, 합계와 비교는 센트 단위 정수로 계산합니다.
//! `0.1 * 3`처럼 부동소수점 오차가 생기는 값도 `30`센트로 정확히 더해집니다.

/// 소수 금액을 센트로 변환합니다. 셋째 자리는 반올림됩니다.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents_absorbs_float_error() {
        assert_eq!(to_cents(0.1 * 3.0), 30);
        assert_eq!(to_cents(0.3), 30);
        assert_eq!(to_cents(49.5), 4950);
        assert_eq!(to_cents(19.999), 2000);
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(from_cents(30), 0.3);
        assert_eq!(from_cents(4950), 49.5);
        assert_eq!(from_cents(0), 0.0);
    }
}
