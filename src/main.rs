//! Demo walk-through of the filter pipeline: criteria groups are built into
//! a predicate tree, applied locally to a small job list, then compiled
//! into parameterized SQL for a remote backend.

use anyhow::{Context, Result};
use criteria_filter::{
    evaluate, filter, Criterion, CriteriaGroup, FieldType, FieldValue, FilterRequest,
    PredicateBuilder, Record, Schema, SqlTranslator, Translate,
};

struct Job {
    id: &'static str,
    assigned_to: &'static str,
    status: &'static str,
    description: &'static str,
}

impl Record for Job {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "JobId" => Some(FieldValue::Text(self.id)),
            "AssignedTo" => Some(FieldValue::Text(self.assigned_to)),
            "Status" => Some(FieldValue::Text(self.status)),
            "Description" => Some(FieldValue::Text(self.description)),
            _ => None,
        }
    }
}

fn jobs() -> Vec<Job> {
    let job = |id, assigned_to, status, description| Job {
        id,
        assigned_to,
        status,
        description,
    };

    vec![
        job("J00001", "Bob", "InProgress", "Paint the wall in the break room"),
        job("J00002", "Bob", "New", "Fix the leaking tap"),
        job("J00003", "Mary", "Complete", "Wash the windows on the second floor"),
        job("J00004", "Bill", "New", "Replace the carpet tiles"),
        job("J00005", "Bill", "InProgress", "Service the HVAC unit"),
        job("J00006", "Mary", "InProgress", "Polish the walnut reception desk"),
        job("J00007", "Joe", "Complete", "Clear the Washington Ave gutters"),
        job("J00008", "Bob", "Complete", "Install the whiteboard in room 4"),
        job("J00009", "Joe", "New", "Repair the parking barrier"),
        job("J00010", "Bill", "Cancelled", "Move the archive boxes"),
        job("J00011", "Mary", "Cancelled", "Rewire the workshop sockets"),
        job("J00012", "Sue", "New", "Label the server racks"),
    ]
}

/// Load the schema from schema.json, falling back to the built-in job
/// schema when the file is unavailable.
fn load_schema() -> Schema {
    match Schema::from_json_file("schema.json") {
        Ok(schema) => {
            println!("loaded schema.json ({} fields)", schema.len());
            schema
        }
        Err(e) => {
            println!("schema.json unavailable ({e}), using built-in job schema");
            Schema::new()
                .field("JobId", FieldType::Text)
                .field("AssignedTo", FieldType::Text)
                .field("Status", FieldType::Enum)
                .field("Description", FieldType::Text)
        }
    }
}

fn main() -> Result<()> {
    println!("--- criteria_filter: criteria -> predicate tree -> evaluate / SQL ---");

    println!("\n[step 1] schema");
    let schema = load_schema();

    println!("\n[step 2] criteria: Bob's jobs, or Mary's cancelled ones");
    let request = FilterRequest::new()
        .group(CriteriaGroup::new().with(Criterion::equals("AssignedTo", "Bob")))
        .group(
            CriteriaGroup::new()
                .with(Criterion::equals("AssignedTo", "Mary"))
                .with(Criterion::equals("Status", "Cancelled")),
        );

    println!("\n[step 3] build the predicate tree");
    let predicate = PredicateBuilder::new(schema)
        .build(&request)
        .context("failed to build predicate")?;
    println!("{predicate}");

    println!("\n[step 4] evaluate locally");
    for job in filter(jobs(), &predicate) {
        println!(
            "  {} {:<4} {:<10} {}",
            job.id, job.assigned_to, job.status, job.description
        );
    }

    println!("\n[step 5] translate for a SQL backend");
    let sql_filter = SqlTranslator::new("jobs")
        .translate(&predicate)
        .context("failed to translate predicate")?;
    println!("  sql:    {}", sql_filter.sql);
    println!("  params: {:?}", sql_filter.params.0);

    println!("\n[step 6] the empty request selects nothing");
    let empty = PredicateBuilder::new(load_schema())
        .build(&FilterRequest::new())
        .context("failed to build empty predicate")?;
    let survivors = jobs().iter().filter(|job| evaluate(&empty, *job)).count();
    println!("  {empty} -> {survivors} of 12 rows");

    Ok(())
}
