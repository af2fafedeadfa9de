//! Integration tests for template expansion

use std::path::Path;

use pretty_assertions::assert_eq;
use tplexpand::descriptor::Tag;
use tplexpand::{expand, expand_file, DescriptorTable, Emitter, ExpandConfig, Expander};

const PRIMITIVE_ARRAY: &str = include_str!("fixtures/primitive_array.tpl");

#[test]
fn test_lines_without_markers_are_copied() {
    let source = "#import \"RLMTestCase.h\"\n\n@implementation X\n- (void)test {\n}\n@end\n";
    assert_eq!(expand(source), source);
}

#[test]
fn test_tag_count_matches_table_selection() {
    let table = DescriptorTable::build();
    let expander = Expander::default();

    for a in Tag::ALL {
        for b in Tag::ALL {
            let line = format!("%{} %{} $array", a.name(), b.name());
            let produced = expander.expand_line(&line);
            let expected: Vec<String> = table
                .select(&[a, b])
                .into_iter()
                .map(|i| table[i].array_path.clone())
                .collect();
            assert_eq!(produced, expected, "tags {} {}", a, b);
        }
    }
}

#[test]
fn test_minmax_values_scenario() {
    let out = expand("result = $values ; // %minmax\n");
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "result = @[@2, @3] ; //");
    assert_eq!(lines[3], "result = @[date(1), date(2)] ; //");
    assert_eq!(lines[4], "result = @[@2, @3, NSNull.null] ; //");
}

#[test]
fn test_paren_aligned_break() {
    assert_eq!(expand("call(a ^n b)\n"), "call(a\n     b)\n");
}

#[test]
fn test_fixed_indent_break() {
    assert_eq!(expand("x = 1 ^nl y = 2\n"), "x = 1\n    y = 2\n");
}

#[test]
fn test_line_terminators_preserved() {
    let out = expand("head\r\n%r %unman %avg $v1\r\ntail");
    assert_eq!(out, "head\r\n@3\r\n@3.3f\r\n@3.3\r\ntail");
}

#[test]
fn test_expansion_is_deterministic() {
    assert_eq!(expand(PRIMITIVE_ARRAY), expand(PRIMITIVE_ARRAY));
}

#[test]
fn test_fixture_line_counts() {
    let expander = Expander::default();
    let mut emitter = Emitter::new(Vec::new());
    expander
        .expand_into(PRIMITIVE_ARRAY, &mut emitter)
        .expect("Should expand");
    let (buf, stats) = emitter.finish().expect("Should flush");
    let out = String::from_utf8(buf).expect("Should be UTF-8");

    assert_eq!(stats.template_lines, 33);
    assert_eq!(stats.lines_written, 205);
    assert_eq!(stats.empty_expansions, 0);
    assert_eq!(out.lines().count(), 259);
    assert!(!out.contains('$'), "unresolved placeholder in output");
    assert!(!out.contains("%minmax"));
    assert!(!out.contains(" ^n"));
}

#[test]
fn test_fixture_wrong_type_probe_for_strings() {
    let out = expand(PRIMITIVE_ARRAY);

    assert!(out.contains("[unmanaged.stringObj addObject:@2],\n"));
    assert!(out.contains(
        "\n                              @\"Invalid value '2' of type '__NSCFNumber' for 'string?' array property 'AllPrimitiveArrays.stringObj'.\");"
    ));
    assert!(out.contains(
        "@\"Invalid value 'a' of type '__NSCFConstantString' for 'int' array property 'AllPrimitiveArrays.intObj'.\");"
    ));
}

#[test]
fn test_fixture_sum_section() {
    let out = expand(PRIMITIVE_ARRAY);
    assert!(out.contains(
        "    [managed.intObj addObjects:@[@2, @3]];\n    XCTAssertEqualObjects([managed.intObj sumOfProperty:@\"self\"], @(2 + 3));\n"
    ));
    assert!(out.contains("[optManaged.doubleObj addObjects:@[@2.2, @3.3, NSNull.null]];"));
    assert!(!out.contains("[unmanaged.intObj addObjects:"));
}

#[test]
fn test_snapshot_small_template() {
    let source = "- (void)testFirst {\n    %r %man %sum XCTAssertEqualObjects($array.firstObject, $first);\n}\n";
    insta::assert_snapshot!(expand(source), @r###"
    - (void)testFirst {
        XCTAssertEqualObjects(managed.intObj.firstObject, @2);
        XCTAssertEqualObjects(managed.floatObj.firstObject, @2.2f);
        XCTAssertEqualObjects(managed.doubleObj.firstObject, @2.2);
    }
    "###);
}

#[test]
fn test_expand_file_matches_expand() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/primitive_array.tpl");
    let from_file = expand_file(&path, ExpandConfig::new()).expect("Should read fixture");
    assert_eq!(from_file, expand(PRIMITIVE_ARRAY));
}

#[test]
fn test_custom_table() {
    use tplexpand::descriptor::{BaseEntry, PropertyType, StorageMode};

    let table = DescriptorTable::from_entries(&[
        BaseEntry::new(StorageMode::Managed, PropertyType::Date),
        BaseEntry::new(StorageMode::OptionalManaged, PropertyType::Date),
    ]);
    let expander = Expander::with_table(table, ExpandConfig::new());
    assert_eq!(
        expander.expand("$type $last\n"),
        "date date(2)\ndate? NSNull.null\n"
    );
}
