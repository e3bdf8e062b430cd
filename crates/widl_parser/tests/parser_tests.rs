//! Parser integration tests.
//!
//! Verifies that the parser builds the expected definition trees from WebIDL
//! source, and that malformed source fails with a precisely positioned error.

use widl_ast::ast::*;
use widl_parser::parse;

/// Helper: parse source text, panicking with the error on failure.
fn parse_ok(source: &str) -> Vec<Definition> {
    match parse(source) {
        Ok(defs) => defs,
        Err(e) => panic!("parse failed on {:?}: {}", source, e),
    }
}

/// Helper: parse source text that must fail, returning the error.
fn parse_err(source: &str) -> widl_diagnostics::ParseError {
    match parse(source) {
        Ok(_) => panic!("expected a parse error for {:?}", source),
        Err(e) => e,
    }
}

/// Helper: assert the number of top-level definitions.
fn assert_definition_count(source: &str, expected: usize) {
    assert_eq!(parse_ok(source).len(), expected, "source: {}", source);
}

/// Helper: parse a single definition and return it.
fn parse_one(source: &str) -> Definition {
    let mut defs = parse_ok(source);
    assert_eq!(defs.len(), 1, "source: {}", source);
    defs.remove(0)
}

/// Helper: parse an interface with one member and return that member.
fn parse_member(member_source: &str) -> Member {
    let source = format!("interface T {{ {} }};", member_source);
    match parse_one(&source) {
        Definition::Interface(mut i) => {
            assert_eq!(i.members.len(), 1, "source: {}", source);
            i.members.remove(0)
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

/// Helper: parse `typedef <ty> T;` and return the type.
fn parse_type(type_source: &str) -> Type {
    match parse_one(&format!("typedef {} T;", type_source)) {
        Definition::Typedef(t) => t.idl_type,
        other => panic!("expected typedef, got {:?}", other),
    }
}

// ============================================================================
// Definitions
// ============================================================================

#[test]
fn test_parse_empty_input() {
    assert_definition_count("", 0);
    assert_definition_count("  \n\t // comment\n/* block */", 0);
}

#[test]
fn test_parse_empty_interface() {
    let def = parse_one("interface Foo {};");
    match def {
        Definition::Interface(i) => {
            assert_eq!(i.name, "Foo");
            assert!(i.members.is_empty());
            assert!(i.inheritance.is_none());
            assert!(!i.partial);
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_parse_interface_inheritance() {
    match parse_one("interface HTMLDivElement : HTMLElement {};") {
        Definition::Interface(i) => {
            assert_eq!(i.name, "HTMLDivElement");
            assert_eq!(i.inheritance.as_deref(), Some("HTMLElement"));
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_parse_partial_interface() {
    let def = parse_one("partial interface Window {};");
    assert!(def.is_partial());
    assert_eq!(def.name(), "Window");
}

#[test]
fn test_parse_interface_mixin() {
    match parse_one("interface mixin GlobalEventHandlers { attribute long onload; };") {
        Definition::InterfaceMixin(m) => {
            assert_eq!(m.name, "GlobalEventHandlers");
            assert_eq!(m.members.len(), 1);
        }
        other => panic!("expected mixin, got {:?}", other),
    }
}

#[test]
fn test_parse_callback_interface() {
    match parse_one("callback interface EventListener { undefined handleEvent(Event event); };") {
        Definition::CallbackInterface(c) => {
            assert_eq!(c.name, "EventListener");
            assert_eq!(c.members.len(), 1);
        }
        other => panic!("expected callback interface, got {:?}", other),
    }
}

#[test]
fn test_parse_callback_function() {
    match parse_one("callback Predicate = boolean (DOMString item, unsigned long index);") {
        Definition::CallbackFunction(c) => {
            assert_eq!(c.name, "Predicate");
            assert_eq!(c.return_type, Type::primitive(PrimitiveType::Boolean));
            assert_eq!(c.arguments.len(), 2);
            assert_eq!(c.arguments[1].name, "index");
            assert_eq!(
                c.arguments[1].idl_type,
                Type::primitive(PrimitiveType::UnsignedLong)
            );
        }
        other => panic!("expected callback, got {:?}", other),
    }
}

#[test]
fn test_parse_namespace() {
    match parse_one("namespace Console { undefined log(any... data); };") {
        Definition::Namespace(n) => {
            assert_eq!(n.name, "Console");
            assert_eq!(n.members.len(), 1);
            assert!(!n.partial);
        }
        other => panic!("expected namespace, got {:?}", other),
    }
}

#[test]
fn test_parse_partial_namespace_and_dictionary() {
    assert!(parse_one("partial namespace Console {};").is_partial());
    assert!(parse_one("partial dictionary Options {};").is_partial());
}

#[test]
fn test_parse_typedef() {
    match parse_one("typedef sequence<DOMString> StringList;") {
        Definition::Typedef(t) => {
            assert_eq!(t.name, "StringList");
            assert_eq!(
                t.idl_type,
                Type::Sequence {
                    element: Box::new(Type::primitive(PrimitiveType::DOMString)),
                }
            );
        }
        other => panic!("expected typedef, got {:?}", other),
    }
}

#[test]
fn test_parse_includes_statement() {
    match parse_one("Window includes GlobalEventHandlers;") {
        Definition::Includes(inc) => {
            assert_eq!(inc.target, "Window");
            assert_eq!(inc.includes, "GlobalEventHandlers");
        }
        other => panic!("expected includes, got {:?}", other),
    }
}

#[test]
fn test_parse_enum() {
    match parse_one(r#"enum Dir { "ltr", "rtl", "auto" };"#) {
        Definition::Enum(e) => {
            assert_eq!(e.name, "Dir");
            let values: Vec<&str> = e.values.iter().map(|v| v.value.as_str()).collect();
            assert_eq!(values, ["ltr", "rtl", "auto"]);
        }
        other => panic!("expected enum, got {:?}", other),
    }
}

#[test]
fn test_parse_enum_trailing_comma() {
    match parse_one(r#"enum E { "a", "b", };"#) {
        Definition::Enum(e) => assert_eq!(e.values.len(), 2),
        other => panic!("expected enum, got {:?}", other),
    }
}

#[test]
fn test_parse_dictionary() {
    match parse_one("dictionary D : Base { required long a; DOMString b = \"x\"; long c; };") {
        Definition::Dictionary(d) => {
            assert_eq!(d.name, "D");
            assert_eq!(d.inheritance.as_deref(), Some("Base"));
            assert_eq!(d.members.len(), 3);
            assert!(d.members[0].required);
            assert!(d.members[0].default.is_none());
            assert_eq!(
                d.members[1].default,
                Some(Value::String { value: "x".into() })
            );
            assert!(!d.members[2].required);
        }
        other => panic!("expected dictionary, got {:?}", other),
    }
}

#[test]
fn test_order_preservation() {
    let defs = parse_ok(
        "interface A {};\nenum E { \"x\" };\ntypedef long T;\ndictionary D {};\nnamespace N {};",
    );
    let names: Vec<&str> = defs.iter().map(|d| d.name()).collect();
    assert_eq!(names, ["A", "E", "T", "D", "N"]);
}

// ============================================================================
// Interface Members
// ============================================================================

#[test]
fn test_parse_attribute() {
    match parse_member("attribute long x;") {
        Member::Attribute(a) => {
            assert_eq!(a.name, "x");
            assert_eq!(a.idl_type, Type::primitive(PrimitiveType::Long));
            assert!(!a.readonly);
            assert!(!a.inherit);
            assert!(a.special.is_none());
        }
        other => panic!("expected attribute, got {:?}", other),
    }
}

#[test]
fn test_parse_readonly_attribute() {
    match parse_member("readonly attribute DOMString name;") {
        Member::Attribute(a) => {
            assert!(a.readonly);
            assert_eq!(a.name, "name");
        }
        other => panic!("expected attribute, got {:?}", other),
    }
}

#[test]
fn test_parse_static_and_stringifier_attributes() {
    match parse_member("static readonly attribute long count;") {
        Member::Attribute(a) => {
            assert_eq!(a.special, Some(AttributeSpecial::Static));
            assert!(a.readonly);
        }
        other => panic!("expected attribute, got {:?}", other),
    }
    match parse_member("stringifier attribute DOMString href;") {
        Member::Attribute(a) => {
            assert_eq!(a.special, Some(AttributeSpecial::Stringifier));
        }
        other => panic!("expected attribute, got {:?}", other),
    }
}

#[test]
fn test_parse_inherit_attribute() {
    match parse_member("inherit attribute long x;") {
        Member::Attribute(a) => assert!(a.inherit),
        other => panic!("expected attribute, got {:?}", other),
    }
}

#[test]
fn test_parse_regular_operation() {
    match parse_member("Node appendChild(Node node);") {
        Member::Operation(op) => {
            assert_eq!(op.name.as_deref(), Some("appendChild"));
            assert!(op.special.is_none());
            assert_eq!(op.return_type, Some(Type::named("Node")));
            assert_eq!(op.arguments.len(), 1);
            assert_eq!(op.arguments[0].name, "node");
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_special_operations() {
    match parse_member("getter DOMString (unsigned long index);") {
        Member::Operation(op) => {
            assert_eq!(op.special, Some(OperationSpecial::Getter));
            assert!(op.name.is_none());
        }
        other => panic!("expected operation, got {:?}", other),
    }
    match parse_member("setter undefined (unsigned long index, DOMString value);") {
        Member::Operation(op) => assert_eq!(op.special, Some(OperationSpecial::Setter)),
        other => panic!("expected operation, got {:?}", other),
    }
    match parse_member("deleter undefined (DOMString name);") {
        Member::Operation(op) => assert_eq!(op.special, Some(OperationSpecial::Deleter)),
        other => panic!("expected operation, got {:?}", other),
    }
    match parse_member("static boolean isTypeSupported(DOMString type);") {
        Member::Operation(op) => {
            assert_eq!(op.special, Some(OperationSpecial::Static));
            assert_eq!(op.name.as_deref(), Some("isTypeSupported"));
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_named_special_operation() {
    match parse_member("getter DOMString item(unsigned long index);") {
        Member::Operation(op) => {
            assert_eq!(op.special, Some(OperationSpecial::Getter));
            assert_eq!(op.name.as_deref(), Some("item"));
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_bare_stringifier() {
    match parse_member("stringifier;") {
        Member::Operation(op) => {
            assert_eq!(op.special, Some(OperationSpecial::Stringifier));
            assert!(op.name.is_none());
            assert!(op.return_type.is_none());
            assert!(op.arguments.is_empty());
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_constructor() {
    match parse_member("constructor(DOMString url, optional DOMString base);") {
        Member::Constructor(c) => {
            assert_eq!(c.arguments.len(), 2);
            assert!(c.arguments[1].optional);
        }
        other => panic!("expected constructor, got {:?}", other),
    }
}

#[test]
fn test_parse_const_member() {
    match parse_member("const unsigned short DONE = 2;") {
        Member::Const(c) => {
            assert_eq!(c.name, "DONE");
            assert_eq!(c.idl_type, Type::primitive(PrimitiveType::UnsignedShort));
            assert_eq!(c.value, Value::Integer { value: "2".into() });
        }
        other => panic!("expected const, got {:?}", other),
    }
}

#[test]
fn test_parse_const_special_values() {
    match parse_member("const unrestricted double NEG = -Infinity;") {
        Member::Const(c) => assert_eq!(c.value, Value::Infinity { negative: true }),
        other => panic!("expected const, got {:?}", other),
    }
    match parse_member("const unrestricted double NOT_A_NUMBER = NaN;") {
        Member::Const(c) => assert_eq!(c.value, Value::NaN),
        other => panic!("expected const, got {:?}", other),
    }
    match parse_member("const boolean FLAG = true;") {
        Member::Const(c) => assert_eq!(c.value, Value::Boolean { value: true }),
        other => panic!("expected const, got {:?}", other),
    }
}

#[test]
fn test_parse_const_hex_value_preserved() {
    match parse_member("const unsigned long MASK = 0xFF;") {
        Member::Const(c) => assert_eq!(c.value, Value::Integer { value: "0xFF".into() }),
        other => panic!("expected const, got {:?}", other),
    }
}

#[test]
fn test_parse_iterable() {
    match parse_member("iterable<DOMString>;") {
        Member::Iterable(it) => {
            assert!(!it.is_async);
            assert!(it.key_type.is_none());
            assert_eq!(it.value_type, Type::primitive(PrimitiveType::DOMString));
        }
        other => panic!("expected iterable, got {:?}", other),
    }
    match parse_member("iterable<DOMString, Node>;") {
        Member::Iterable(it) => {
            assert_eq!(it.key_type, Some(Type::primitive(PrimitiveType::DOMString)));
            assert_eq!(it.value_type, Type::named("Node"));
        }
        other => panic!("expected iterable, got {:?}", other),
    }
}

#[test]
fn test_parse_async_iterable_with_arguments() {
    match parse_member("async iterable<Uint8Array>(optional ReadOptions options = {});") {
        Member::Iterable(it) => {
            assert!(it.is_async);
            assert_eq!(it.arguments.len(), 1);
            assert_eq!(it.arguments[0].default, Some(Value::EmptyDictionary));
        }
        other => panic!("expected iterable, got {:?}", other),
    }
}

#[test]
fn test_parse_maplike_and_setlike() {
    match parse_member("readonly maplike<DOMString, any>;") {
        Member::Maplike(m) => {
            assert!(m.readonly);
            assert_eq!(m.key_type, Type::primitive(PrimitiveType::DOMString));
        }
        other => panic!("expected maplike, got {:?}", other),
    }
    match parse_member("setlike<long>;") {
        Member::Setlike(s) => {
            assert!(!s.readonly);
            assert_eq!(s.value_type, Type::primitive(PrimitiveType::Long));
        }
        other => panic!("expected setlike, got {:?}", other),
    }
}

// ============================================================================
// Arguments
// ============================================================================

#[test]
fn test_parse_optional_argument_with_default() {
    match parse_member("undefined f(optional long x = 42);") {
        Member::Operation(op) => {
            let arg = &op.arguments[0];
            assert!(arg.optional);
            assert!(!arg.variadic);
            assert_eq!(arg.default, Some(Value::Integer { value: "42".into() }));
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_variadic_argument() {
    match parse_member("undefined log(any... data);") {
        Member::Operation(op) => {
            assert!(op.arguments[0].variadic);
            assert!(!op.arguments[0].optional);
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_keyword_argument_name() {
    // `attribute` and `callback` are legal argument names.
    match parse_member("undefined f(long attribute, DOMString callback);") {
        Member::Operation(op) => {
            assert_eq!(op.arguments[0].name, "attribute");
            assert_eq!(op.arguments[1].name, "callback");
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

#[test]
fn test_parse_default_value_kinds() {
    let cases: &[(&str, Value)] = &[
        ("optional DOMString s = \"hi\"", Value::String { value: "hi".into() }),
        ("optional Node? n = null", Value::Null),
        ("optional any u = undefined", Value::Undefined),
        ("optional sequence<long> q = []", Value::EmptySequence),
        ("optional Options o = {}", Value::EmptyDictionary),
        ("optional double d = 1.5", Value::Decimal { value: "1.5".into() }),
    ];
    for (arg, expected) in cases {
        match parse_member(&format!("undefined f({});", arg)) {
            Member::Operation(op) => {
                assert_eq!(op.arguments[0].default.as_ref(), Some(expected), "arg: {}", arg)
            }
            other => panic!("expected operation, got {:?}", other),
        }
    }
}

// ============================================================================
// Extended Attributes
// ============================================================================

#[test]
fn test_parse_bare_extended_attribute() {
    match parse_one("[Exposed] interface Foo {};") {
        Definition::Interface(i) => {
            assert_eq!(i.ext_attrs.len(), 1);
            assert_eq!(i.ext_attrs[0].name, "Exposed");
            assert!(i.ext_attrs[0].rhs.is_none());
            assert!(i.ext_attrs[0].arguments.is_none());
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_parse_extended_attribute_rhs_forms() {
    let attrs = |source: &str| match parse_one(source) {
        Definition::Interface(i) => i.ext_attrs,
        other => panic!("expected interface, got {:?}", other),
    };

    let a = attrs("[Exposed=Window] interface F {};");
    assert_eq!(a[0].rhs, Some(ExtAttrRhs::Identifier("Window".into())));

    let a = attrs("[Exposed=(Window,Worker)] interface F {};");
    assert_eq!(
        a[0].rhs,
        Some(ExtAttrRhs::IdentifierList(vec!["Window".into(), "Worker".into()]))
    );

    let a = attrs("[ReflectOnly=(\"on\",\"off\")] interface F {};");
    assert_eq!(
        a[0].rhs,
        Some(ExtAttrRhs::StringList(vec!["on".into(), "off".into()]))
    );

    let a = attrs("[PutForwards=href] interface F {};");
    assert_eq!(a[0].rhs, Some(ExtAttrRhs::Identifier("href".into())));

    let a = attrs("[Version=2] interface F {};");
    assert_eq!(a[0].rhs, Some(ExtAttrRhs::Integer("2".into())));

    let a = attrs("[Exposed=*] interface F {};");
    assert_eq!(a[0].rhs, Some(ExtAttrRhs::Wildcard));
}

#[test]
fn test_parse_extended_attribute_argument_lists() {
    match parse_one("[Constructor(DOMString type)] interface Event {};") {
        Definition::Interface(i) => {
            let args = i.ext_attrs[0].arguments.as_ref().unwrap();
            assert_eq!(args.len(), 1);
            assert_eq!(args[0].name, "type");
        }
        other => panic!("expected interface, got {:?}", other),
    }

    // Named argument list: identifier rhs followed by arguments.
    match parse_one("[LegacyFactoryFunction=Image(optional unsigned long width)] interface I {};") {
        Definition::Interface(i) => {
            assert_eq!(i.ext_attrs[0].rhs, Some(ExtAttrRhs::Identifier("Image".into())));
            assert_eq!(i.ext_attrs[0].arguments.as_ref().unwrap().len(), 1);
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_parse_multiple_extended_attributes() {
    match parse_one("[Exposed=Window, SecureContext] interface Foo {};") {
        Definition::Interface(i) => {
            assert_eq!(i.ext_attrs.len(), 2);
            assert_eq!(i.ext_attrs[1].name, "SecureContext");
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_parse_member_and_argument_extended_attributes() {
    match parse_member("[NewObject] Node cloneNode([Clamp] optional long depth = 0);") {
        Member::Operation(op) => {
            assert_eq!(op.ext_attrs[0].name, "NewObject");
            assert_eq!(op.arguments[0].ext_attrs[0].name, "Clamp");
        }
        other => panic!("expected operation, got {:?}", other),
    }
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_parse_primitive_types() {
    let cases: &[(&str, PrimitiveType)] = &[
        ("long", PrimitiveType::Long),
        ("long long", PrimitiveType::LongLong),
        ("unsigned long", PrimitiveType::UnsignedLong),
        ("unsigned long long", PrimitiveType::UnsignedLongLong),
        ("unsigned short", PrimitiveType::UnsignedShort),
        ("unrestricted float", PrimitiveType::UnrestrictedFloat),
        ("unrestricted double", PrimitiveType::UnrestrictedDouble),
        ("byte", PrimitiveType::Byte),
        ("octet", PrimitiveType::Octet),
        ("bigint", PrimitiveType::Bigint),
        ("USVString", PrimitiveType::USVString),
        ("undefined", PrimitiveType::Undefined),
    ];
    for (source, expected) in cases {
        assert_eq!(parse_type(source), Type::primitive(*expected), "type: {}", source);
    }
}

#[test]
fn test_parse_nullable_binding() {
    assert_eq!(
        parse_type("long?"),
        Type::nullable(Type::primitive(PrimitiveType::Long))
    );
    // `?` binds to the whole union, not its last member.
    assert_eq!(
        parse_type("(long or DOMString)?"),
        Type::nullable(Type::Union {
            members: vec![
                Type::primitive(PrimitiveType::Long),
                Type::primitive(PrimitiveType::DOMString),
            ],
        })
    );
}

#[test]
fn test_parse_nested_containers() {
    assert_eq!(
        parse_type("sequence<sequence<long>>"),
        Type::Sequence {
            element: Box::new(Type::Sequence {
                element: Box::new(Type::primitive(PrimitiveType::Long)),
            }),
        }
    );
    assert_eq!(
        parse_type("FrozenArray<Node>"),
        Type::FrozenArray { element: Box::new(Type::named("Node")) }
    );
    assert_eq!(
        parse_type("ObservableArray<long>"),
        Type::ObservableArray {
            element: Box::new(Type::primitive(PrimitiveType::Long)),
        }
    );
    assert_eq!(
        parse_type("Promise<undefined>"),
        Type::Promise {
            element: Box::new(Type::primitive(PrimitiveType::Undefined)),
        }
    );
}

#[test]
fn test_parse_record_type() {
    assert_eq!(
        parse_type("record<DOMString, sequence<long>>"),
        Type::Record {
            key: PrimitiveType::DOMString,
            value: Box::new(Type::Sequence {
                element: Box::new(Type::primitive(PrimitiveType::Long)),
            }),
        }
    );
}

#[test]
fn test_parse_nested_union() {
    assert_eq!(
        parse_type("(long or (DOMString or Node?))"),
        Type::Union {
            members: vec![
                Type::primitive(PrimitiveType::Long),
                Type::Union {
                    members: vec![
                        Type::primitive(PrimitiveType::DOMString),
                        Type::nullable(Type::named("Node")),
                    ],
                },
            ],
        }
    );
}

#[test]
fn test_parse_underscore_escaped_identifier() {
    // Leading underscore escapes a reserved word; the cooked name drops it.
    match parse_one("interface _interface {};") {
        Definition::Interface(i) => assert_eq!(i.name, "interface"),
        other => panic!("expected interface, got {:?}", other),
    }
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_definition_span_covers_whole_declaration() {
    let source = "  interface Foo { attribute long x; };  ";
    let def = parse_one(source);
    let span = def.span();
    assert_eq!(
        &source[span.to_range()],
        "interface Foo { attribute long x; };"
    );
}

#[test]
fn test_member_span() {
    let source = "interface Foo { attribute long x; };";
    match parse_one(source) {
        Definition::Interface(i) => {
            let span = i.members[0].span();
            assert_eq!(&source[span.to_range()], "attribute long x;");
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_error_at_missing_member_name() {
    // The `;` after `long` is the offending token.
    let source = "interface Foo { long; };";
    let err = parse_err(source);
    assert!(!err.is_lex_error());
    assert_eq!(err.span.to_range(), source.find(';').unwrap()..source.find(';').unwrap() + 1);
    assert!(err.message.contains("identifier expected"), "message: {}", err.message);
}

#[test]
fn test_error_at_unknown_definition() {
    let err = parse_err("123");
    assert!(err.message.contains("expected one of"), "message: {}", err.message);
    assert!(err.message.contains("'123'"), "message: {}", err.message);
    assert_eq!(err.location.line, 1);
    assert_eq!(err.location.column, 1);
}

#[test]
fn test_error_at_end_of_input() {
    let err = parse_err("interface Foo {");
    assert!(err.message.contains("end of input"), "message: {}", err.message);
}

#[test]
fn test_error_missing_semicolon() {
    let err = parse_err("interface Foo {}");
    assert!(err.message.contains("';' expected"), "message: {}", err.message);
}

#[test]
fn test_error_single_member_union() {
    assert!(parse("typedef (long) T;").is_err());
}

#[test]
fn test_error_non_string_record_key() {
    let err = parse_err("typedef record<long, DOMString> T;");
    assert!(err.message.contains("record keys"), "message: {}", err.message);
}

#[test]
fn test_error_constructor_outside_interface() {
    assert!(parse("interface mixin M { constructor(); };").is_err());
    assert!(parse("namespace N { constructor(); };").is_err());
}

#[test]
fn test_error_attribute_in_callback_interface() {
    assert!(parse("callback interface C { attribute long x; };").is_err());
}

#[test]
fn test_error_positions_reported_on_correct_line() {
    let source = "interface Foo {\n  attribute long x;\n  long;\n};";
    let err = parse_err(source);
    assert_eq!(err.location.line, 3);
}

#[test]
fn test_lex_error_propagates() {
    let err = parse_err("interface Foo { attribute long @; };");
    assert!(err.is_lex_error());
}

#[test]
fn test_parse_with_file_labels_errors() {
    let err = widl_parser::parse_with_file("123", "bad.idl").unwrap_err();
    assert_eq!(err.file.as_deref(), Some("bad.idl"));
}

// ============================================================================
// End-to-End
// ============================================================================

#[test]
fn test_end_to_end_interface_with_attribute() {
    match parse_one("interface A { attribute long x; };") {
        Definition::Interface(i) => {
            assert_eq!(i.name, "A");
            match &i.members[0] {
                Member::Attribute(a) => {
                    assert_eq!(a.name, "x");
                    assert_eq!(a.idl_type, Type::primitive(PrimitiveType::Long));
                }
                other => panic!("expected attribute, got {:?}", other),
            }
        }
        other => panic!("expected interface, got {:?}", other),
    }
}

#[test]
fn test_end_to_end_dictionary_with_default() {
    match parse_one("dictionary D { DOMString a; long b = 0; };") {
        Definition::Dictionary(d) => {
            assert_eq!(d.members.len(), 2);
            assert_eq!(d.members[1].default, Some(Value::Integer { value: "0".into() }));
        }
        other => panic!("expected dictionary, got {:?}", other),
    }
}

#[test]
fn test_serialization_is_deterministic() {
    let source = r#"
        [Exposed=(Window,Worker)]
        interface URLSearchParams {
            constructor(optional (sequence<sequence<USVString>> or record<USVString, USVString> or USVString) init = "");
            undefined append(USVString name, USVString value);
            getter USVString? get(USVString name);
            iterable<USVString, USVString>;
            stringifier;
        };
    "#;
    let a = serde_json::to_string(&parse_ok(source)).unwrap();
    let b = serde_json::to_string(&parse_ok(source)).unwrap();
    assert_eq!(a, b);
    assert!(a.contains("\"type\":\"interface\""));
    assert!(a.contains("\"type\":\"constructor\""));
}

#[test]
fn test_realistic_fragment() {
    let source = r#"
        // DOM fragment
        [Exposed=Window]
        interface Event {
            constructor(DOMString type, optional EventInit eventInitDict = {});
            readonly attribute DOMString type;
            readonly attribute EventTarget? target;
            const unsigned short NONE = 0;
            const unsigned short CAPTURING_PHASE = 1;
            undefined stopPropagation();
        };

        dictionary EventInit {
            boolean bubbles = false;
            boolean cancelable = false;
        };

        enum ShadowRootMode { "open", "closed" };

        typedef (Int8Array or Int16Array or Int32Array) ArrayBufferView;

        callback EventHandlerNonNull = any (Event event);

        partial interface Window {
            attribute EventHandlerNonNull? onerror;
        };

        Window includes GlobalEventHandlers;
    "#;
    let defs = parse_ok(source);
    assert_eq!(defs.len(), 7);
    assert_eq!(defs[0].name(), "Event");
    match &defs[0] {
        Definition::Interface(i) => assert_eq!(i.members.len(), 6),
        other => panic!("expected interface, got {:?}", other),
    }
    assert!(defs[5].is_partial());
}
