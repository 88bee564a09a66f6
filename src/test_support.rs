use crate::domain::weather::HourlySample;

/// 24 dry hours with a gentle temperature curve and the given weather codes.
pub(crate) fn samples_for_day(code: impl Fn(u32) -> u8) -> Vec<HourlySample> {
    samples_with(|hour| (2.0 + hour as f32 * 0.5, 0.0, code(hour)))
}

/// 24 hours built from `(temperature, precipitation probability, code)`.
pub(crate) fn samples_with(values: impl Fn(u32) -> (f32, f32, u8)) -> Vec<HourlySample> {
    (0..24)
        .map(|hour| {
            let (temperature, precipitation_probability, weather_code) = values(hour);
            HourlySample {
                hour,
                temperature,
                precipitation_probability,
                precipitation_amount: precipitation_probability / 50.0,
                weather_code,
            }
        })
        .collect()
}
