use anyview_types::{props, Props, Value};

/// Conversion funnel with plain numeric stages
pub fn simple_funnel() -> Props {
    props!(
        "input" => 110,
        "registration" => 80,
        "cart" => 40,
        "checkout" => 20,
        "retention" => 12,
    )
}

/// Funnel whose first stage splits into traffic sources
pub fn rich_funnel() -> Props {
    props!(
        "input" => Value::Map(props!("src1" => 50, "src2" => 40, "src3" => 20)),
        "registration" => 80,
        "cart" => 40,
        "checkout" => 20,
        "retention" => 12,
    )
}

/// Small nested structure exercising every value shape
pub fn profile() -> Value {
    Value::Map(props!(
        "name" => "ada",
        "age" => 36,
        "active" => true,
        "tags" => Value::Seq(vec![Value::from("math"), Value::from("engines")]),
        "address" => Value::Map(props!("city" => "London", "zip" => "N1")),
    ))
}
