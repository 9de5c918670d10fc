//! Prompt construction for student summaries.

use crate::registry::StudentRecord;

/// Build the prompt asking the model to describe a student.
#[must_use]
pub fn student_summary_prompt(record: &StudentRecord) -> String {
    format!(
        "Generate a summary for a student. Name: {}, Age: {}, Email: {}. \
         Provide a description of the student and any interesting traits.",
        record.name, record.age, record.email
    )
}
