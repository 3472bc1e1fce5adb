//! Assembles a predicate tree from a filter request, validating every
//! criterion against the record schema as it goes.
//!
//! All validation happens here, fail-fast: a tree that builds successfully
//! can be evaluated or translated without further checks.

use crate::criteria::{Criterion, CriteriaGroup, FilterRequest, Literal, Operator};
use crate::error::BuildError;
use crate::predicate::Predicate;
use crate::schema::{FieldType, Schema};

pub struct PredicateBuilder {
    schema: Schema,
}

impl PredicateBuilder {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Build one Or-chain across groups, one And-chain within each group,
    /// left-associative and in listed order.
    ///
    /// An empty request yields [`Predicate::MatchNone`]; an empty group
    /// degenerates to [`Predicate::MatchAll`]. Building is pure and
    /// deterministic: identical requests produce structurally identical
    /// trees.
    pub fn build(&self, request: &FilterRequest) -> Result<Predicate, BuildError> {
        let mut group_trees = Vec::with_capacity(request.groups.len());
        for group in &request.groups {
            group_trees.push(self.build_group(group)?);
        }

        Ok(group_trees
            .into_iter()
            .reduce(Predicate::or)
            .unwrap_or(Predicate::MatchNone))
    }

    fn build_group(&self, group: &CriteriaGroup) -> Result<Predicate, BuildError> {
        let mut comparisons = Vec::with_capacity(group.criteria.len());
        for criterion in &group.criteria {
            comparisons.push(self.build_comparison(criterion)?);
        }

        Ok(comparisons
            .into_iter()
            .reduce(Predicate::and)
            .unwrap_or(Predicate::MatchAll))
    }

    fn build_comparison(&self, criterion: &Criterion) -> Result<Predicate, BuildError> {
        let field_type =
            self.schema
                .field_type(&criterion.field)
                .ok_or_else(|| BuildError::UnknownField {
                    field: criterion.field.clone(),
                })?;

        match criterion.operator {
            Operator::Equals => self.check_equals(criterion, field_type)?,
            Operator::Contains => self.check_contains(criterion, field_type)?,
        }

        Ok(Predicate::Comparison {
            field: criterion.field.clone(),
            op: criterion.operator,
            value: criterion.value.clone(),
        })
    }

    fn check_equals(&self, criterion: &Criterion, field_type: FieldType) -> Result<(), BuildError> {
        let compatible = matches!(
            (field_type, &criterion.value),
            (FieldType::Text | FieldType::Enum, Literal::Text(_)) | (FieldType::Int, Literal::Int(_))
        );
        if !compatible {
            return Err(BuildError::TypeMismatch {
                field: criterion.field.clone(),
                detail: format!(
                    "expected a {} value, got {}",
                    field_type,
                    criterion.value.kind()
                ),
            });
        }
        Ok(())
    }

    fn check_contains(
        &self,
        criterion: &Criterion,
        field_type: FieldType,
    ) -> Result<(), BuildError> {
        if field_type != FieldType::Text {
            return Err(BuildError::TypeMismatch {
                field: criterion.field.clone(),
                detail: format!("CONTAINS requires a text field, `{}` is {}", criterion.field, field_type),
            });
        }
        match &criterion.value {
            Literal::Text(needle) if needle.is_empty() => Err(BuildError::InvalidCriterion {
                field: criterion.field.clone(),
                reason: "empty search text".to_string(),
            }),
            Literal::Text(_) => Ok(()),
            Literal::Int(_) => Err(BuildError::TypeMismatch {
                field: criterion.field.clone(),
                detail: "CONTAINS requires a text search value, got int".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::FilterRequest;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn job_schema() -> Schema {
        Schema::new()
            .field("JobId", FieldType::Text)
            .field("AssignedTo", FieldType::Text)
            .field("Status", FieldType::Enum)
            .field("Description", FieldType::Text)
            .field("Priority", FieldType::Int)
    }

    fn structural_hash(predicate: &Predicate) -> u64 {
        let mut hasher = DefaultHasher::new();
        predicate.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_request_builds_the_empty_predicate() {
        let builder = PredicateBuilder::new(job_schema());
        let tree = builder.build(&FilterRequest::new()).unwrap();
        assert_eq!(tree, Predicate::MatchNone);
        assert!(tree.matches_nothing());
    }

    #[test]
    fn empty_group_degenerates_to_match_all() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new().group(CriteriaGroup::new());
        assert_eq!(builder.build(&request).unwrap(), Predicate::MatchAll);
    }

    #[test]
    fn tree_shape_mirrors_input_shape() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new()
            .group(CriteriaGroup::new().with(Criterion::equals("AssignedTo", "Bob")))
            .group(
                CriteriaGroup::new()
                    .with(Criterion::equals("AssignedTo", "Mary"))
                    .with(Criterion::equals("Status", "Cancelled")),
            );

        let tree = builder.build(&request).unwrap();
        let expected = Predicate::comparison("AssignedTo", Operator::Equals, "Bob").or(
            Predicate::comparison("AssignedTo", Operator::Equals, "Mary")
                .and(Predicate::comparison("Status", Operator::Equals, "Cancelled")),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn and_chain_is_left_associative() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new().group(
            CriteriaGroup::new()
                .with(Criterion::equals("AssignedTo", "Mary"))
                .with(Criterion::equals("Status", "Cancelled"))
                .with(Criterion::contains("Description", "roof")),
        );

        let first = Predicate::comparison("AssignedTo", Operator::Equals, "Mary");
        let second = Predicate::comparison("Status", Operator::Equals, "Cancelled");
        let third = Predicate::comparison("Description", Operator::Contains, "roof");
        assert_eq!(builder.build(&request).unwrap(), first.and(second).and(third));
    }

    #[test]
    fn building_is_deterministic() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new()
            .group(CriteriaGroup::new().with(Criterion::equals("AssignedTo", "Bob")))
            .group(CriteriaGroup::new().with(Criterion::contains("Description", "the w")));

        let first = builder.build(&request).unwrap();
        let second = builder.build(&request).unwrap();
        assert_eq!(first, second);
        assert_eq!(structural_hash(&first), structural_hash(&second));
    }

    #[test]
    fn unknown_field_fails_at_build_time() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new()
            .group(CriteriaGroup::new().with(Criterion::equals("Assignee", "Bob")));

        assert_eq!(
            builder.build(&request),
            Err(BuildError::UnknownField {
                field: "Assignee".to_string()
            })
        );
    }

    #[test]
    fn literal_kind_must_match_field_type() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new()
            .group(CriteriaGroup::new().with(Criterion::equals("Priority", "high")));

        assert!(matches!(
            builder.build(&request),
            Err(BuildError::TypeMismatch { field, .. }) if field == "Priority"
        ));
    }

    #[test]
    fn contains_rejects_non_text_fields() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new().group(CriteriaGroup::new().with(Criterion {
            field: "Status".to_string(),
            operator: Operator::Contains,
            value: Literal::Text("Can".to_string()),
        }));

        assert!(matches!(
            builder.build(&request),
            Err(BuildError::TypeMismatch { field, .. }) if field == "Status"
        ));
    }

    #[test]
    fn contains_rejects_empty_search_text() {
        let builder = PredicateBuilder::new(job_schema());
        let request = FilterRequest::new()
            .group(CriteriaGroup::new().with(Criterion::contains("Description", "")));

        assert_eq!(
            builder.build(&request),
            Err(BuildError::InvalidCriterion {
                field: "Description".to_string(),
                reason: "empty search text".to_string()
            })
        );
    }
}
