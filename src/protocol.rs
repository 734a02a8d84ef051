use std::fmt;

use crate::convert::ConvertError;

/// One parsed request line: `<request_id> <value> <from_unit> <to_unit>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub id: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl Request {
    /// Parses one protocol line. Blank lines carry no request.
    ///
    /// # Errors
    ///
    /// If the line is malformed, the error response to emit in its place.
    /// The first token stands in as the request id whether or not it is one.
    pub fn parse(buffer: &str) -> Result<Option<Self>, Response> {
        let tokens: Vec<&str> = buffer.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(None);
        }

        let [id, value, from_unit, to_unit] = tokens[..] else {
            let id = tokens.first().copied().unwrap_or("unknown");
            return Err(Response::Error {
                id: id.to_string(),
                message: "Invalid input format".to_string(),
            });
        };

        let value = value.parse::<f64>().map_err(|error| Response::Error {
            id: id.to_string(),
            message: ConvertError::Failed(error.to_string()).to_string(),
        })?;

        Ok(Some(Self {
            id: id.to_string(),
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }))
    }
}

/// One response line, always tagged with the request id.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Converted { id: String, value: f64 },
    Error { id: String, message: String },
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted { id, value } => write!(f, "{id} {value:.10}"),
            Self::Error { id, message } => write!(f, "{id} ERROR {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request() -> Result<(), Response> {
        let request = Request::parse("r1 -2.5e2 celsius kelvin")?;

        assert_eq!(
            request,
            Some(Request {
                id: "r1".to_string(),
                value: -250.0,
                from_unit: "celsius".to_string(),
                to_unit: "kelvin".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn parse_blank_line() -> Result<(), Response> {
        assert_eq!(Request::parse("")?, None);
        assert_eq!(Request::parse("  \t \n")?, None);
        Ok(())
    }

    #[test]
    fn parse_wrong_token_count() {
        let expected = Err(Response::Error {
            id: "bad".to_string(),
            message: "Invalid input format".to_string(),
        });

        assert_eq!(Request::parse("bad 1 2 3 4 5"), expected);
        assert_eq!(Request::parse("bad 1 meter"), expected);
    }

    #[test]
    fn parse_bad_value() {
        assert_eq!(
            Request::parse("r2 abc meter feet"),
            Err(Response::Error {
                id: "r2".to_string(),
                message: "Conversion failed: invalid float literal".to_string(),
            })
        );
    }

    #[test]
    fn response_formatting() {
        let converted = Response::Converted {
            id: "r1".to_string(),
            value: 212.0,
        };
        assert_eq!(converted.to_string(), "r1 212.0000000000");

        let error = Response::Error {
            id: "r2".to_string(),
            message: "Unsupported unit: lightyear".to_string(),
        };
        assert_eq!(error.to_string(), "r2 ERROR Unsupported unit: lightyear");
    }
}
