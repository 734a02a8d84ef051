use thiserror::Error;

use crate::{
    category::UnitCategory,
    protocol::{Request, Response},
    units::Units,
};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(String),
    #[error("Cannot convert between different unit categories: {from} to {to}")]
    CategoryMismatch { from: String, to: String },
    #[error("Unsupported {category} unit conversion: {from} to {to}")]
    UnsupportedConversion {
        category: UnitCategory,
        from: String,
        to: String,
    },
    /// Catch all for failures outside the conversion tables, such as a
    /// value that does not parse as a number.
    #[error("Conversion failed: {0}")]
    Failed(String),
}

/// The conversion engine: the unit tables plus pure dispatch over them.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    units: Units,
}

impl Converter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            units: Units::new(),
        }
    }

    /// Converts `value` from one unit to another.
    ///
    /// # Errors
    ///
    /// If either unit is unknown or the units belong to different
    /// categories.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let from_category = self
            .units
            .category(from)
            .ok_or_else(|| ConvertError::UnsupportedUnit(from.to_string()))?;
        let to_category = self
            .units
            .category(to)
            .ok_or_else(|| ConvertError::UnsupportedUnit(to.to_string()))?;

        if from_category != to_category {
            return Err(ConvertError::CategoryMismatch {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        match from_category {
            UnitCategory::Temperature => convert_temperature(value, from, to),
            category => self.convert_linear(category, value, from, to),
        }
    }

    /// Handles one protocol line, returning the response to emit, if any.
    /// Blank lines produce no response, every other line produces exactly
    /// one.
    #[must_use]
    pub fn read_line(&self, buffer: &str) -> Option<Response> {
        let request = match Request::parse(buffer) {
            Ok(Some(request)) => request,
            Ok(None) => return None,
            Err(response) => return Some(response),
        };

        let response = match self.convert(request.value, &request.from_unit, &request.to_unit) {
            Ok(value) => Response::Converted {
                id: request.id,
                value,
            },
            Err(error) => Response::Error {
                id: request.id,
                message: error.to_string(),
            },
        };

        Some(response)
    }

    // Multiply into the base unit, divide out of it. O(1) per added unit
    // and any pivot unit yields the same result up to rounding.
    fn convert_linear(
        &self,
        category: UnitCategory,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64, ConvertError> {
        let unsupported = || ConvertError::UnsupportedConversion {
            category,
            from: from.to_string(),
            to: to.to_string(),
        };

        let table = self.units.factors(category).ok_or_else(unsupported)?;
        let from_factor = table.get(from).ok_or_else(unsupported)?;
        let to_factor = table.get(to).ok_or_else(unsupported)?;

        Ok(value * from_factor / to_factor)
    }
}

// Pivot through Celsius, one formula per direction.
fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if from == to {
        return Ok(value);
    }

    let celsius = match from {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => return Err(ConvertError::UnsupportedUnit(from.to_string())),
    };

    let result = match to {
        "celsius" => celsius,
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + 273.15,
        _ => return Err(ConvertError::UnsupportedUnit(to.to_string())),
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_unit() {
        let converter = Converter::new();

        assert_eq!(
            converter.convert(1.0, "lightyear", "meter"),
            Err(ConvertError::UnsupportedUnit("lightyear".to_string()))
        );
        assert_eq!(
            converter.convert(1.0, "meter", "lightyear"),
            Err(ConvertError::UnsupportedUnit("lightyear".to_string()))
        );
    }

    #[test]
    fn category_mismatch() {
        let converter = Converter::new();
        let error = converter.convert(1.0, "meter", "kilogram");

        assert_eq!(
            error,
            Err(ConvertError::CategoryMismatch {
                from: "meter".to_string(),
                to: "kilogram".to_string(),
            })
        );
        assert_eq!(
            error.unwrap_err().to_string(),
            "Cannot convert between different unit categories: meter to kilogram"
        );
    }

    // The linear converter reports units missing from its table even
    // though the dispatcher never routes such units to it.
    #[test]
    fn linear_conversion_outside_table() {
        let converter = Converter::new();
        let error = converter.convert_linear(UnitCategory::Length, 1.0, "celsius", "meter");

        assert_eq!(
            error.unwrap_err().to_string(),
            "Unsupported length unit conversion: celsius to meter"
        );
    }

    #[test]
    fn temperature_unknown_unit() {
        assert_eq!(
            convert_temperature(1.0, "rankine", "celsius"),
            Err(ConvertError::UnsupportedUnit("rankine".to_string()))
        );
        assert_eq!(
            convert_temperature(1.0, "celsius", "rankine"),
            Err(ConvertError::UnsupportedUnit("rankine".to_string()))
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn temperature_same_unit_is_identity() -> Result<(), ConvertError> {
        let value = 36.6;

        assert_eq!(convert_temperature(value, "kelvin", "kelvin")?, value);
        assert_eq!(convert_temperature(value, "celsius", "celsius")?, value);
        Ok(())
    }
}
