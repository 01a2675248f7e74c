use ballerina_ast::{build_expression, parse_tree_from_json};

#[test]
fn roundtrip_captured_formatting() {
    let tree = parse_tree_from_json(
        r#"{"type":"function_invocation_expression","package_name":"",
            "package_path":".","function_name":"println",
            "whitespace_descriptor":{"regions":{"2":" ","3":"\n"}},
            "children":[{"type":"simple_variable_reference_expression",
                         "variable_name":"x",
                         "whitespace_descriptor":{"regions":{"1":" "}}}]}"#,
    )
    .unwrap();
    let expression = build_expression(&tree).unwrap();
    assert_eq!(expression.expression_string(), "println( x )\n");
}

#[test]
fn roundtrip_canonical_is_stable() {
    let tree = parse_tree_from_json(
        r#"{"type":"function_invocation_expression","package_name":"io",
            "package_path":"ballerina.io","function_name":"println",
            "children":[{"type":"basic_literal_expression",
                         "basic_literal_type":"string",
                         "basic_literal_value":"hi"}]}"#,
    )
    .unwrap();
    let first = build_expression(&tree).unwrap().generate_expression();
    let second = build_expression(&tree).unwrap().generate_expression();
    assert_eq!(first, "io:println(\"hi\")");
    assert_eq!(first, second);
}
