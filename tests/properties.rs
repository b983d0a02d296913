//! Behavioral properties of the public API, end to end.

use json_shape::{checks, ty, validate, Check, Descriptor, Fields, Schema};
use serde_json::{json, Value};

fn verdict(d: impl Into<Descriptor>, v: Value) -> Value {
    match validate(&d.into(), &v) {
        Ok(()) => Value::Bool(true),
        Err(f) => f.to_report(),
    }
}

#[test]
fn conforming_values_pass() {
    let d = ty::object(
        Fields::new()
            .field("id", ty::string())
            .field("scores", ty::array(ty::number()))
            .field("meta", ty::shape(Fields::new().field("active", ty::boolean()))),
        Fields::new().field("note", ty::string()),
    );
    let v = json!({"id": "a1", "scores": [1, 2.5], "meta": {"active": true}});
    assert_eq!(verdict(d, v), json!(true));
}

#[test]
fn missing_required_string_fails_at_its_name() {
    let d = ty::shape(Fields::new().field("f", ty::string()).field("g", ty::number()));
    assert_eq!(verdict(d, json!({"g": 1})), json!({"f": "Expecting string but got undefined."}));
}

#[test]
fn third_array_element_reported_alone() {
    assert_eq!(
        verdict(ty::array(ty::number()), json!([1, 2, "x"])),
        json!({"2": "Expecting number but got string."}),
    );
}

#[test]
fn optional_field_absent_or_wrong() {
    let d = ty::object(
        Fields::new().field("a", ty::number()),
        Fields::new().field("b", ty::string()),
    );
    assert_eq!(verdict(d.clone(), json!({"a": 1})), json!(true));
    assert_eq!(verdict(d, json!({"a": 1, "b": false})), json!({"b": "Expecting string but got boolean."}));
}

#[test]
fn intersection_prefers_the_right_operand() {
    let left = ty::shape(Fields::new().field("a", ty::string()));
    let right = ty::shape(Fields::new().field("a", ty::number()));
    let both = ty::intersect(&left, &right);
    assert_eq!(verdict(both.clone(), json!({"a": 5})), json!(true));
    assert_eq!(verdict(both, json!({"a": "x"})), json!({"a": "Expecting number but got string."}));
}

#[test]
fn intersection_combines_disjoint_fields() -> anyhow::Result<()> {
    let named = ty::object(Fields::new().field("name", ty::string()), Fields::new());
    let dated = ty::object(
        Fields::new().field("created", ty::string().with_check(checks::pattern(r"^\d{4}-\d{2}-\d{2}$")?)),
        Fields::new().field("updated", ty::string()),
    );
    let both = ty::intersect(&named, &dated);
    assert_eq!(verdict(both.clone(), json!({"name": "n", "created": "2024-01-02"})), json!(true));
    assert_eq!(
        verdict(both, json!({"name": "n", "created": "yesterday"})),
        json!({"created": r"Does not match pattern `^\d{4}-\d{2}-\d{2}$`."}),
    );
    Ok(())
}

#[test]
fn predicate_message_surfaces_at_root() {
    let positive = ty::number().with_check(Check::new(|v| {
        if v.as_f64().is_some_and(|n| n > 0.0) { Ok(()) } else { Err("must be positive".into()) }
    }));
    assert_eq!(verdict(positive, json!(-1)), json!({"": "must be positive"}));
}

#[test]
fn nested_paths_are_dotted() {
    let d = ty::shape(Fields::new().field(
        "user",
        ty::shape(Fields::new().field(
            "address",
            ty::shape(Fields::new().field("zip", ty::string())),
        )),
    ));
    assert_eq!(
        verdict(d, json!({"user": {"address": {"zip": 5}}})),
        json!({"user.address.zip": "Expecting string but got number."}),
    );
}

#[test]
fn shared_sub_descriptor_validates_everywhere() {
    let point = ty::shape(Fields::new().field("x", ty::number()).field("y", ty::number()));
    let line = ty::shape(Fields::new().field("from", point.clone()).field("to", point));
    assert_eq!(
        verdict(line, json!({"from": {"x": 0, "y": 0}, "to": {"x": 1}})),
        json!({"to.y": "Expecting number but got undefined."}),
    );
}

#[test]
fn typed_parse_round() -> anyhow::Result<()> {
    #[derive(Debug, serde::Deserialize)]
    struct Order {
        id: String,
        qty: u32,
        tags: Vec<String>,
    }

    let schema: Schema<Order> = Schema::new(ty::shape(
        Fields::new()
            .field("id", ty::string())
            .field("qty", ty::number().with_check(checks::all([checks::integer(), checks::range(Some(1.0), None)])))
            .field("tags", ty::array(ty::string())),
    ));

    let order = schema.parse(json!({"id": "o-1", "qty": 2, "tags": ["rush"]}))?;
    assert_eq!(order.id, "o-1");
    assert_eq!(order.qty, 2);
    assert_eq!(order.tags, ["rush"]);

    let err = schema.parse(json!({"id": "o-1", "qty": 0, "tags": []})).unwrap_err();
    assert_eq!(err.to_string(), "value does not conform: qty: Expecting a number >= 1 but got 0.");
    Ok(())
}
