//! Interactive prompts for the filter choices and yes / no questions.
//!
//! Everything is generic over [`BufRead`] and [`Write`] so the session can be
//! driven from a scripted buffer in tests and from the locked stdio handles in
//! the binary. A closed input stream is reported as
//! [`BikeshareError::InputClosed`] rather than being retried forever.

use std::io::{BufRead, Write};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{City, DayFilter, FilterCriteria, MonthFilter};
use bikeshare_ui::report_view::separator;
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

const CITY_PROMPT: &str =
    "Please input the city you want 'chicago' , 'new york city' or 'washington': ";
const MONTH_PROMPT: &str =
    "Please choose month (All, January, February, March, April, May, June): ";
const DAY_PROMPT: &str =
    "Please choose day (All, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday): ";

// ── PromptAnswer ──────────────────────────────────────────────────────────────

/// Outcome of reading one line against a set of allowed answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// The normalised (trimmed, lower-cased) answer is allowed.
    Valid(String),
    /// The raw line as typed, minus its line ending.
    Invalid(String),
}

/// Read one line from `input` and classify it against `allowed`.
///
/// `allowed` must already be lower-case.
pub fn read_answer<R: BufRead>(input: &mut R, allowed: &[String]) -> Result<PromptAnswer> {
    let raw = read_line(input)?;
    let normalised = raw.trim().to_lowercase();
    if allowed.iter().any(|a| *a == normalised) {
        Ok(PromptAnswer::Valid(normalised))
    } else {
        Ok(PromptAnswer::Invalid(raw))
    }
}

// ── Prompts ───────────────────────────────────────────────────────────────────

/// Ask `message` until the answer is one of `allowed`, then echo and return it.
pub fn prompt_choice<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
    allowed: &[String],
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", message)?;
        output.flush()?;

        match read_answer(input, allowed)? {
            PromptAnswer::Valid(value) => {
                writeln!(output, "Great! the chosen entry is: {}\n", value)?;
                return Ok(value);
            }
            PromptAnswer::Invalid(raw) => {
                debug!(answer = %raw, "rejected prompt answer");
                writeln!(
                    output,
                    "Sorry... it seems like you're not typing a correct entry."
                )?;
                writeln!(output, "Let's try again!")?;
            }
        }
    }
}

/// Ask a yes / no question. Only `yes`, in any letter case and with nothing
/// else on the line, counts as agreement.
pub fn ask_yes_no<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", message)?;
    output.flush()?;
    let answer = read_line(input)?;
    Ok(answer.eq_ignore_ascii_case("yes"))
}

/// Greet the user and collect city, month and day, in that order.
pub fn collect_filters<R, W>(input: &mut R, output: &mut W) -> Result<FilterCriteria>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;

    let cities: Vec<String> = City::ALL.iter().map(|c| c.key().to_string()).collect();
    let city = prompt_choice(input, output, CITY_PROMPT, &cities)?;
    let month = prompt_choice(input, output, MONTH_PROMPT, &MonthFilter::choices())?;
    let day = prompt_choice(input, output, DAY_PROMPT, &DayFilter::choices())?;

    writeln!(output, "{}", separator())?;

    // Every value below passed the allow-list check above.
    let criteria = FilterCriteria {
        city: city.parse()?,
        month: MonthFilter::parse(&month)
            .ok_or_else(|| BikeshareError::Config(format!("unknown month {:?}", month)))?,
        day: DayFilter::parse(&day)
            .ok_or_else(|| BikeshareError::Config(format!("unknown day {:?}", day)))?,
    };
    debug!(%criteria, "filters collected");
    Ok(criteria)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One line without its trailing `\n` / `\r\n`; EOF is an error.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BikeshareError::InputClosed);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
