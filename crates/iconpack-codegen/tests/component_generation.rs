//! End-to-end tests for iconpack-codegen.
//!
//! Tests the complete generation workflow:
//! 1. Build icon assets from raw SVG
//! 2. Generate both module formats for a category
//! 3. Verify components and barrels agree

use iconpack_codegen::{Framework, GeneratedCode, IconGenerator};
use iconpack_core::{IconAsset, ModuleFormat, PackageName};

const ARROW_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
  <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7"/>
</svg>
"#;

const BELL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Bell -->
<svg width="24" height="24" xmlns="http://www.w3.org/2000/svg">
  <path d="M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11"/>
</svg>
"#;

fn layout_icons() -> Vec<IconAsset> {
    vec![
        IconAsset::new("optimized/icons/layout/arrow-left.svg", ARROW_LEFT).unwrap(),
        IconAsset::new("optimized/icons/layout/bell.svg", BELL).unwrap(),
    ]
}

fn generate(package: &str, format: ModuleFormat) -> GeneratedCode {
    let framework = Framework::for_package(&PackageName::new(package)).unwrap();
    let generator = IconGenerator::new(framework).unwrap();
    generator.generate_category(&layout_icons(), format).unwrap()
}

#[test]
fn test_react_arrow_left_esm() {
    let code = generate("react", ModuleFormat::Esm);
    let component = code.get("ArrowLeftIcon.js").unwrap().content();

    let expected = "import * as React from \"react\";

function ArrowLeftIcon(props, svgRef) {
  return /*#__PURE__*/React.createElement(\"svg\", Object.assign({
    fill: \"none\",
    viewBox: \"0 0 24 24\",
    strokeWidth: \"2\",
    stroke: \"currentColor\",
    \"aria-hidden\": \"true\",
    ref: svgRef
  }, props), /*#__PURE__*/React.createElement(\"path\", {
    strokeLinecap: \"round\",
    strokeLinejoin: \"round\",
    d: \"M15 19l-7-7 7-7\"
  }));
}

const ForwardRef = React.forwardRef(ArrowLeftIcon);
export default ForwardRef;
";
    assert_eq!(component, expected);
}

#[test]
fn test_react_cjs_differs_only_in_module_statements() {
    let esm = generate("react", ModuleFormat::Esm);
    let cjs = generate("react", ModuleFormat::Cjs);

    let esm_code = esm.get("BellIcon.js").unwrap().content();
    let cjs_code = cjs.get("BellIcon.js").unwrap().content();

    assert_eq!(
        cjs_code,
        esm_code
            .replace("import * as React from \"react\"", "const React = require(\"react\")")
            .replace("export default", "module.exports =")
    );
    assert_eq!(
        esm.get("BellIcon.d.ts").unwrap(),
        cjs.get("BellIcon.d.ts").unwrap()
    );
}

#[test]
fn test_dimensions_become_view_box() {
    let code = generate("vue", ModuleFormat::Esm);
    let component = code.get("BellIcon.js").unwrap().content();

    assert!(component.contains("viewBox: \"0 0 24 24\""));
    assert!(!component.contains("width: \"24\""));
    assert!(!component.contains("xmlns"));
    assert!(!component.contains("Bell -->"));
}

#[test]
fn test_vue_cjs_module() {
    let code = generate("vue", ModuleFormat::Cjs);
    let component = code.get("ArrowLeftIcon.js").unwrap().content();

    assert!(component.starts_with(
        "const { createElementVNode: _createElementVNode, openBlock: _openBlock, createElementBlock: _createElementBlock } = require(\"vue\")\n"
    ));
    assert!(component.contains("module.exports = function render(_ctx, _cache) {"));
    assert!(component.contains("\"stroke-linecap\": \"round\""));
    assert!(!component.contains("import "));
}

#[test]
fn test_barrels_reference_generated_files() {
    for package in ["react", "vue"] {
        for format in ModuleFormat::ALL {
            let code = generate(package, format);

            let barrel = code.get("index.js").unwrap().content();
            assert!(!barrel.ends_with('\n'));
            assert_eq!(barrel.lines().count(), 2);

            for line in code.get("index.d.ts").unwrap().content().lines() {
                let name = line
                    .strip_prefix("export { default as ")
                    .and_then(|rest| rest.split_once(' '))
                    .map(|(name, _)| name)
                    .unwrap();
                assert!(code.get(&format!("{name}.js")).is_some(), "{package}/{format}: {name}");
                assert!(code.get(&format!("{name}.d.ts")).is_some());
            }
        }
    }
}

#[test]
fn test_single_quoted_attribute_with_double_quotes() {
    let icons = vec![
        IconAsset::new(
            "optimized/icons/editor/text.svg",
            r#"<svg viewBox="0 0 24 24"><text font-family='"Inter", sans-serif'>A</text></svg>"#,
        )
        .unwrap(),
    ];

    let react = IconGenerator::new(Framework::React)
        .unwrap()
        .generate_category(&icons, ModuleFormat::Esm)
        .unwrap();
    let component = react.get("TextIcon.js").unwrap().content();
    assert!(component.contains(r#"fontFamily: "\"Inter\", sans-serif""#));
    assert!(component.contains(r#"}, "A")"#));

    let vue = IconGenerator::new(Framework::Vue)
        .unwrap()
        .generate_category(&icons, ModuleFormat::Cjs)
        .unwrap();
    let component = vue.get("TextIcon.js").unwrap().content();
    assert!(component.contains(r#""font-family": "\"Inter\", sans-serif""#));
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate("vue", ModuleFormat::Esm), generate("vue", ModuleFormat::Esm));
    assert_eq!(generate("react", ModuleFormat::Cjs), generate("react", ModuleFormat::Cjs));
}
