//! Wire types for `GET /v1/forecast`

use serde::Deserialize;

use dine_core::CurrentWeather;

#[derive(Debug, Deserialize)]
pub(super) struct ForecastResponseDto {
    pub(super) current: Option<CurrentDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentDto {
    pub(super) temperature_2m: f64,
    pub(super) weather_code: i64,
}

impl From<CurrentDto> for CurrentWeather {
    fn from(dto: CurrentDto) -> Self {
        CurrentWeather {
            temperature: dto.temperature_2m,
            weather_code: dto.weather_code,
        }
    }
}
