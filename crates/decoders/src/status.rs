use homework_common::error::PollError;
use homework_common::types::{HomeworkRecord, HomeworkStatus};

/// Build the chat message for a homework record.
///
/// Output: `Changed status for "<name>": <verdict>`.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, PollError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(PollError::MissingField("homework_name"))?;
    let raw_status = homework
        .status
        .as_deref()
        .ok_or(PollError::MissingField("status"))?;

    let status: HomeworkStatus = raw_status.parse()?;

    tracing::debug!(homework = name, %status, "Parsed homework status");

    Ok(format!(
        "Changed status for \"{}\": {}",
        name,
        status.verdict()
    ))
}
