use nullable::expr::*;
use nullable::prelude::*;

fn context() -> Context {
    [("price", Value::Int(10)), ("discount", Value::Float(2.5)), ("member", Value::Bool(true))]
        .into_iter()
        .collect()
}

#[test]
fn price_with_discount() {
    let ctx = context();
    let total = sub(ident("price"), either(ident("discount"), num(0)));
    assert_eq!(present(Value::Float(7.5)), resolve(&total, &ctx));

    let ctx = Context::new().with("price", 10);
    assert_eq!(present(Value::Int(10)), resolve(&total, &ctx));
}

#[test]
fn missing_values_propagate() {
    let ctx = context();
    let total = mul(ident("price"), ident("quantity"));
    assert_eq!(absent(), resolve(&total, &ctx));
    assert_eq!(Value::Int(0), resolve(&total, &ctx).get_or_else(Value::Int(0)));
}

#[test]
fn conditions_with_unknowns() {
    let ctx = context();

    // `vip` is unknown, but `member` already decides the OR
    let eligible = or(ident("member"), ident("vip"));
    assert_eq!(present(true), resolve_bool(&eligible, &ctx));

    // unknown AND true is still unknown
    let eligible = and(ident("member"), ident("vip"));
    assert_eq!(absent(), resolve_bool(&eligible, &ctx));

    // comparing against an unknown is false, not unknown
    let expensive = greater_than(ident("price"), ident("budget"));
    assert_eq!(present(false), resolve_bool(&expensive, &ctx));
}

#[test]
fn display_and_resolve() {
    let expr = and(greater_than(ident("price"), num(5)), not(ident("member")));
    assert_eq!("price > 5 && !member", expr.to_string());
    assert_eq!(present(false), resolve_bool(&expr, &context()));
}
