//! Shared test fixture: the 12-row job dataset and its schema.

use crate::evaluator::{FieldValue, Record};
use crate::schema::{FieldType, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    New,
    InProgress,
    Complete,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::New => "New",
            JobStatus::InProgress => "InProgress",
            JobStatus::Complete => "Complete",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: &'static str,
    pub assigned_to: &'static str,
    pub status: JobStatus,
    pub description: &'static str,
}

impl Record for Job {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "JobId" => Some(FieldValue::Text(self.id)),
            "AssignedTo" => Some(FieldValue::Text(self.assigned_to)),
            "Status" => Some(FieldValue::Text(self.status.as_str())),
            "Description" => Some(FieldValue::Text(self.description)),
            _ => None,
        }
    }
}

pub fn job_schema() -> Schema {
    Schema::new()
        .field("JobId", FieldType::Text)
        .field("AssignedTo", FieldType::Text)
        .field("Status", FieldType::Enum)
        .field("Description", FieldType::Text)
}

pub fn sample_jobs() -> Vec<Job> {
    use JobStatus::*;

    let job = |id, assigned_to, status, description| Job {
        id,
        assigned_to,
        status,
        description,
    };

    vec![
        job("J00001", "Bob", InProgress, "Paint the wall in the break room"),
        job("J00002", "Bob", New, "Fix the leaking tap"),
        job("J00003", "Mary", Complete, "Wash the windows on the second floor"),
        job("J00004", "Bill", New, "Replace the carpet tiles"),
        job("J00005", "Bill", InProgress, "Service the HVAC unit"),
        job("J00006", "Mary", InProgress, "Polish the walnut reception desk"),
        job("J00007", "Joe", Complete, "Clear the Washington Ave gutters"),
        job("J00008", "Bob", Complete, "Install the whiteboard in room 4"),
        job("J00009", "Joe", New, "Repair the parking barrier"),
        job("J00010", "Bill", Cancelled, "Move the archive boxes"),
        job("J00011", "Mary", Cancelled, "Rewire the workshop sockets"),
        job("J00012", "Sue", New, "Label the server racks"),
    ]
}
