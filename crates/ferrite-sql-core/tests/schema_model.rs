//! Declaring entities and records through the crate surface.

use ferrite_sql_core::{
    Field, FormatHint, MapRegistry, Record, SchemaEntity, SimpleType, TypeRegistry, Value,
};

fn order_entity() -> SchemaEntity {
    SchemaEntity::new("purchaseOrder")
        .collection("orders")
        .field(Field::new("id", SimpleType::Uuid))
        .field(Field::new("placedAt", SimpleType::Date).format(FormatHint::Timestamp))
        .field(Field::new("customerId", SimpleType::Uuid).foreign_key("crm.customer:id"))
        .field(Field::new("note", SimpleType::Text).optional())
}

#[test]
fn test_entities_keep_declaration_order() {
    let entity = order_entity();
    let names: Vec<&str> = entity
        .fields
        .iter()
        .map(|field| field.name.as_str())
        .collect();
    assert_eq!(names, vec!["id", "placedAt", "customerId", "note"]);
}

#[test]
fn test_occurrence_constraints() {
    let entity = order_entity();
    assert!(entity.fields[0].is_required());
    assert!(!entity.fields[3].is_required());
}

#[test]
fn test_registry_resolution_through_the_trait() {
    let mut registry = MapRegistry::new();
    registry.register("crm.customer", SchemaEntity::new("customer"));
    let resolver: &dyn TypeRegistry = &registry;
    assert_eq!(
        resolver.resolve("crm.customer").map(SchemaEntity::table_name),
        Some(String::from("customer"))
    );
    assert!(resolver.resolve("crm.order").is_none());
}

#[test]
fn test_records_hold_values_by_declared_name() {
    let entity = order_entity();
    let record = Record::new(&entity).set("note", "rush delivery").set("id", None::<i64>);
    assert_eq!(
        record.get("note"),
        Some(&Value::Text(String::from("rush delivery")))
    );
    assert_eq!(record.get("id"), Some(&Value::Null));
    assert_eq!(record.get("placedAt"), None);
}
