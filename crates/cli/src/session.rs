//! Console session: read three sides, validate, print the report.
//!
//! User errors (bad numbers, impossible triangles) are recovered here and
//! turned into one-line messages; only write failures propagate.

use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use trigon::tri::{InvalidTriangle, Report, TriCfg, Triangle};

pub const MSG_BAD_INPUT: &str = "Please enter a valid input.";
pub const MSG_BAD_TRIANGLE: &str = "Please enter a valid triangle.";
pub const MSG_DONE: &str = "Done.";

/// Recoverable failure of one evaluation.
#[derive(Debug, PartialEq)]
pub enum SessionError {
    /// Side `index` (1-based) could not be read or parsed.
    Parse { index: usize, raw: String },
    Triangle(InvalidTriangle),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Parse { index, raw } => {
                write!(f, "side {} is not a number: {:?}", index, raw)
            }
            SessionError::Triangle(err) => write!(f, "invalid triangle: {}", err),
        }
    }
}

impl SessionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::Parse { .. } => MSG_BAD_INPUT,
            SessionError::Triangle(_) => MSG_BAD_TRIANGLE,
        }
    }
}

/// How reports are rendered.
#[derive(Clone, Copy, Debug, Default)]
pub struct Render {
    pub cfg: TriCfg,
    pub json: bool,
}

/// Parse one side: surrounding whitespace is ignored.
pub fn parse_side(index: usize, raw: &str) -> Result<f64, SessionError> {
    raw.trim().parse::<f64>().map_err(|_| SessionError::Parse {
        index,
        raw: raw.trim().to_string(),
    })
}

/// Parse three raw values (e.g. positional arguments), stopping at the first bad one.
pub fn parse_sides<S: AsRef<str>>(raw: &[S; 3]) -> Result<[f64; 3], SessionError> {
    let mut sides = [0.0; 3];
    for (k, (side, s)) in sides.iter_mut().zip(raw).enumerate() {
        *side = parse_side(k + 1, s.as_ref())?;
    }
    Ok(sides)
}

/// Prompt for "Side 1: " .. "Side 3: ", stopping at the first bad value.
///
/// End of input and read failures count as bad input.
pub fn prompt_sides<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Result<[f64; 3], SessionError>> {
    let mut sides = [0.0; 3];
    for (k, side) in sides.iter_mut().enumerate() {
        let index = k + 1;
        write!(out, "Side {}: ", index)?;
        out.flush()?;
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!(index, "eof");
                return Ok(Err(SessionError::Parse {
                    index,
                    raw: String::new(),
                }));
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(index, error = %err, "stdin read failed");
                return Ok(Err(SessionError::Parse {
                    index,
                    raw: String::new(),
                }));
            }
        }
        match parse_side(index, &line) {
            Ok(v) => *side = v,
            Err(err) => return Ok(Err(err)),
        }
    }
    Ok(Ok(sides))
}

/// Validate and evaluate.
pub fn evaluate(sides: [f64; 3], cfg: &TriCfg) -> Result<Report, SessionError> {
    let tri = Triangle::from_sides(sides).map_err(SessionError::Triangle)?;
    Ok(tri.report(cfg))
}

/// Print a report (text block or pretty JSON) or the user-facing error line.
///
/// Returns the report on success so callers can persist it.
pub fn emit<W: Write>(
    out: &mut W,
    sides: Result<[f64; 3], SessionError>,
    render: &Render,
) -> Result<Option<Report>> {
    let outcome = sides.and_then(|s| evaluate(s, &render.cfg));
    match outcome {
        Ok(report) => {
            tracing::info!(kind = %report.kind, area = report.area, "evaluated");
            if render.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "{}", report)?;
            }
            Ok(Some(report))
        }
        Err(err) => {
            tracing::info!(error = %err, "rejected");
            writeln!(out, "{}", err.user_message())?;
            Ok(None)
        }
    }
}

/// Trailer printed after every `prompt`/`eval` run.
pub fn done<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MSG_DONE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, render: Render) -> (String, Option<Report>) {
        let mut inp = Cursor::new(input.as_bytes().to_vec());
        let mut out: Vec<u8> = Vec::new();
        let sides = prompt_sides(&mut inp, &mut out).unwrap();
        let report = emit(&mut out, sides, &render).unwrap();
        done(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    #[test]
    fn prompts_and_reports_right_triangle() {
        let (text, report) = run("3\n4\n5\n", Render::default());
        assert!(text.starts_with("Side 1: Side 2: Side 3: \nType: Scalene\nArea: 6\n"));
        assert!(text.contains("Angles (in order): [36.8699, 53.1301, 90]\n"));
        assert!(text.ends_with("Circumcircle Area: 19.635\n\nDone.\n"));
        assert_eq!(report.unwrap().perimeter, 12.0);
    }

    #[test]
    fn non_numeric_input_stops_prompting() {
        let (text, report) = run("3\nabc\n5\n", Render::default());
        assert_eq!(
            text,
            "Side 1: Side 2: Please enter a valid input.\n\nDone.\n"
        );
        assert!(report.is_none());
    }

    #[test]
    fn eof_is_bad_input() {
        let (text, _) = run("1\n", Render::default());
        assert!(text.ends_with("Please enter a valid input.\n\nDone.\n"));
    }

    #[test]
    fn impossible_triangle_is_reported() {
        let (text, report) = run("1\n2\n10\n", Render::default());
        assert_eq!(
            text,
            "Side 1: Side 2: Side 3: Please enter a valid triangle.\n\nDone.\n"
        );
        assert!(report.is_none());
    }

    #[test]
    fn tolerates_whitespace_around_numbers() {
        let (text, report) = run("  2 \n2\t\n 3\n", Render::default());
        assert!(text.contains("Type: Isosceles"));
        assert!(report.is_some());
    }

    #[test]
    fn json_render() {
        let render = Render {
            json: true,
            ..Render::default()
        };
        let (text, _) = run("1\n1\n1\n", render);
        let body = text
            .trim_start_matches("Side 1: Side 2: Side 3: ")
            .trim_end_matches("\n\nDone.\n");
        let v: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(v["kind"], "Equilateral");
        assert_eq!(v["angles"][0], 60.0);
    }

    #[test]
    fn parse_sides_reports_first_bad_value() {
        assert_eq!(parse_sides(&["3", " 4 ", "5"]), Ok([3.0, 4.0, 5.0]));
        assert_eq!(
            parse_sides(&["3", "", "x"]),
            Err(SessionError::Parse {
                index: 2,
                raw: String::new()
            })
        );
    }

    #[test]
    fn parse_error_message_names_side() {
        let err = parse_side(2, " x ").unwrap_err();
        assert_eq!(err.to_string(), "side 2 is not a number: \"x\"");
        assert_eq!(err.user_message(), MSG_BAD_INPUT);
    }
}
