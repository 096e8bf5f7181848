use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::modules::homework::model::HomeworkRecord;

lazy_static! {
    /// Review verdicts per deployment locale. Keys are the full set of
    /// statuses the review API is documented to emit.
    static ref VERDICTS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("approved", "Работа проверена: ревьюеру всё понравилось. Ура!");
        m.insert("reviewing", "Работа взята на проверку ревьюером.");
        m.insert("rejected", "Работа проверена: у ревьюера есть замечания.");
        m
    };
}

/// A status outside the documented set means the API contract changed
/// underneath us, so it is surfaced instead of skipped.
#[derive(Debug, thiserror::Error)]
#[error("undocumented homework status: {status}")]
pub struct UnknownStatusError {
    pub status: String,
}

/// Build the notification text for one reviewed homework
pub fn status_message(homework: &HomeworkRecord) -> Result<String, UnknownStatusError> {
    let verdict = VERDICTS
        .get(homework.status.as_str())
        .ok_or_else(|| UnknownStatusError {
            status: homework.status.clone(),
        })?;

    Ok(format!(
        "Status changed for \"{}\". {}",
        homework.homework_name, verdict
    ))
}
