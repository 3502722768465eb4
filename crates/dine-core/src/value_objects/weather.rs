//! WMO weather interpretation codes

/// Label used for any code missing from the table
pub const UNKNOWN_WEATHER_LABEL: &str = "알 수 없음";

/// Korean label for a WMO weather code as reported by the forecast API
pub fn weather_label(code: i64) -> &'static str {
    match code {
        0 => "맑음",
        1 => "대체로 맑음",
        2 => "약간 흐림",
        3 => "흐림",
        45 => "안개",
        48 => "결빙성 안개",
        51 => "약한 이슬비",
        53 => "보통 이슬비",
        55 => "강한 이슬비",
        56 => "약한 찬 이슬비",
        57 => "강한 찬 이슬비",
        61 => "약한 비",
        63 => "보통 비",
        65 => "강한 비",
        66 => "약한 찬 비",
        67 => "강한 찬 비",
        71 => "약한 눈",
        73 => "보통 눈",
        75 => "강한 눈",
        77 => "눈알",
        80 => "약한 소나기",
        81 => "보통 소나기",
        82 => "강한 소나기",
        85 => "약한 눈 소나기",
        86 => "강한 눈 소나기",
        95 => "천둥번개",
        96 => "우박 천둥번개",
        99 => "심한 우박 천둥번개",
        _ => UNKNOWN_WEATHER_LABEL,
    }
}
