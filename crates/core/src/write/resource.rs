use crate::write::field::{FieldDefinition, FieldKind};

/// Identifiers for the declared write resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    MultiEditQueue,
    MultiEditQueueEntries,
}

impl ResourceId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultiEditQueue => "multi_edit_queue",
            Self::MultiEditQueueEntries => "multi_edit_queue_entries",
        }
    }
}

/// A resource's field table plus its declared write order.
///
/// Fields keep declaration order; logical names must be unique within a
/// resource. The write order is declared independently of the field
/// graph and lists parents before their dependents.
#[derive(Debug, Clone)]
pub struct ResourceDefinition {
    table: &'static str,
    fields: Vec<FieldDefinition>,
    write_order: Vec<ResourceId>,
}

impl ResourceDefinition {
    fn new(table: &'static str) -> Self {
        Self {
            table,
            fields: Vec::new(),
            write_order: Vec::new(),
        }
    }

    fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    fn with_write_order(mut self, order: impl IntoIterator<Item = ResourceId>) -> Self {
        self.write_order = order.into_iter().collect();
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field by its logical name.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The sequence in which dependent resources must be written.
    pub fn write_order(&self) -> &[ResourceId] {
        &self.write_order
    }
}

/// The multi-edit queue resource (`s_multi_edit_queue`).
pub fn multi_edit_queue() -> ResourceDefinition {
    ResourceDefinition::new("s_multi_edit_queue")
        .field(FieldDefinition::new("resource", "resource", FieldKind::String).required())
        .field(FieldDefinition::new("filterString", "filter_string", FieldKind::LongText).required())
        .field(FieldDefinition::new("operations", "operations", FieldKind::LongText).required())
        .field(FieldDefinition::new("items", "items", FieldKind::Int).required())
        .field(FieldDefinition::new("active", "active", FieldKind::Bool))
        .field(FieldDefinition::new("created", "created", FieldKind::Date))
        .field(FieldDefinition::new(
            "entries",
            "entries",
            FieldKind::Subresource(ResourceId::MultiEditQueueEntries),
        ))
        .with_write_order([ResourceId::MultiEditQueue, ResourceId::MultiEditQueueEntries])
}

/// The queue's dependent entries resource (`s_multi_edit_queue_articles`).
pub fn multi_edit_queue_entries() -> ResourceDefinition {
    ResourceDefinition::new("s_multi_edit_queue_articles")
        .field(
            FieldDefinition::new(
                "queueId",
                "queue_id",
                FieldKind::Reference(ResourceId::MultiEditQueue),
            )
            .required(),
        )
        .field(FieldDefinition::new("detailId", "detail_id", FieldKind::Int).required())
        .with_write_order([ResourceId::MultiEditQueue, ResourceId::MultiEditQueueEntries])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn declared_resources() -> Vec<(ResourceId, ResourceDefinition)> {
        vec![
            (ResourceId::MultiEditQueue, multi_edit_queue()),
            (ResourceId::MultiEditQueueEntries, multi_edit_queue_entries()),
        ]
    }

    #[test]
    fn queue_fields_match_declaration() {
        let queue = multi_edit_queue();
        assert_eq!(queue.table(), "s_multi_edit_queue");

        let names: Vec<&str> = queue.fields().iter().map(|field| field.name).collect();
        assert_eq!(
            names,
            vec![
                "resource",
                "filterString",
                "operations",
                "items",
                "active",
                "created",
                "entries",
            ]
        );

        let filter = queue.field_by_name("filterString").unwrap();
        assert_eq!(filter.column, "filter_string");
        assert_eq!(filter.kind, FieldKind::LongText);
        assert!(filter.required);

        let active = queue.field_by_name("active").unwrap();
        assert!(!active.required);
    }

    #[test]
    fn logical_names_are_unique_per_resource() {
        for (id, resource) in declared_resources() {
            let mut seen = HashSet::new();
            for field in resource.fields() {
                assert!(
                    seen.insert(field.name),
                    "duplicate field `{}` in {}",
                    field.name,
                    id.as_str()
                );
            }
        }
    }

    #[test]
    fn write_order_lists_parent_before_dependents() {
        for (_, resource) in declared_resources() {
            let order = resource.write_order();
            let parent = order
                .iter()
                .position(|id| *id == ResourceId::MultiEditQueue)
                .expect("queue missing from write order");
            let dependent = order
                .iter()
                .position(|id| *id == ResourceId::MultiEditQueueEntries)
                .expect("entries missing from write order");
            assert!(parent < dependent);
        }
    }

    #[test]
    fn subresource_declaration_matches_write_order() {
        let queue = multi_edit_queue();
        for field in queue.fields() {
            if let FieldKind::Subresource(dependent) = field.kind {
                assert!(
                    queue.write_order().contains(&dependent),
                    "subresource {} missing from write order",
                    dependent.as_str()
                );
            }
        }
    }
}
