//! Icon component generator.
//!
//! Turns the icons of one category into a component package for one
//! framework and one module format: one module and one type declaration per
//! icon, plus the two barrel files. The directory's `package.json` is
//! written separately from [`PackageManifest`](crate::PackageManifest).
//!
//! # Examples
//!
//! ```
//! use iconpack_codegen::IconGenerator;
//! use iconpack_codegen::transform::Framework;
//! use iconpack_core::{IconAsset, ModuleFormat};
//!
//! let generator = IconGenerator::new(Framework::React).unwrap();
//! let icons = vec![
//!     IconAsset::new("layout/arrow-left.svg", r#"<svg viewBox="0 0 24 24"><path d="M15 19l-7-7 7-7"/></svg>"#).unwrap(),
//! ];
//!
//! let code = generator.generate_category(&icons, ModuleFormat::Esm).unwrap();
//!
//! // ArrowLeftIcon.js, ArrowLeftIcon.d.ts, index.js, index.d.ts
//! assert_eq!(code.file_count(), 4);
//! assert_eq!(
//!     code.get("index.js").unwrap().content(),
//!     "export { default as ArrowLeftIcon } from './ArrowLeftIcon.js'"
//! );
//! ```

use crate::svg::{optimize_svg, parse_svg};
use crate::template_engine::TemplateEngine;
use crate::transform::Framework;
use crate::types::{
    ComponentContext, ComponentSource, DeclarationContext, GeneratedCode, GeneratedFile,
};
use iconpack_core::{ComponentName, Error, IconAsset, ModuleFormat, Result};

/// Generator for icon component packages.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, so one generator can be shared by every
/// category task through an `Arc`.
#[derive(Debug)]
pub struct IconGenerator<'a> {
    framework: Framework,
    engine: TemplateEngine<'a>,
}

impl IconGenerator<'_> {
    /// Creates a generator for the given framework.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new(framework: Framework) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { framework, engine })
    }

    /// Generates the module and declaration for one optimized SVG.
    ///
    /// # Errors
    ///
    /// Returns error if the SVG cannot be parsed or template rendering
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconpack_codegen::IconGenerator;
    /// use iconpack_codegen::transform::Framework;
    /// use iconpack_core::{ComponentName, ModuleFormat};
    ///
    /// let generator = IconGenerator::new(Framework::Vue).unwrap();
    /// let name = ComponentName::from_file_name("bell.svg").unwrap();
    /// let source = generator
    ///     .generate_component("<svg/>", &name, ModuleFormat::Cjs)
    ///     .unwrap();
    ///
    /// assert!(source.code.starts_with("const { openBlock: _openBlock"));
    /// assert!(source.declaration.contains("declare const BellIcon"));
    /// ```
    pub fn generate_component(
        &self,
        optimized_svg: &str,
        name: &ComponentName,
        format: ModuleFormat,
    ) -> Result<ComponentSource> {
        let root = parse_svg(optimized_svg)?;
        let rendered = self.framework.render(&root)?;

        let context = ComponentContext {
            name: name.as_str(),
            element: &rendered.expression,
            imports: &rendered.imports,
        };
        let esm = self
            .engine
            .render(self.framework.component_template(), &context)?;

        let code = match format {
            ModuleFormat::Esm => esm,
            ModuleFormat::Cjs => self.framework.to_commonjs(&esm),
        };

        let declaration = self.engine.render(
            self.framework.declaration_template(),
            &DeclarationContext {
                name: name.as_str(),
            },
        )?;

        Ok(ComponentSource { code, declaration })
    }

    /// Generates every file of one category directory for one module format.
    ///
    /// Icons are emitted in the order given. Paths in the result are
    /// relative to the format's directory (`<category>/` for CJS,
    /// `<category>/esm/` for ESM).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Icon`] wrapping the first icon that fails to
    /// optimize or render.
    pub fn generate_category(
        &self,
        icons: &[IconAsset],
        format: ModuleFormat,
    ) -> Result<GeneratedCode> {
        let mut code = GeneratedCode::new();

        for icon in icons {
            let name = icon.component_name();
            let source = optimize_svg(icon.svg())
                .and_then(|svg| self.generate_component(&svg, name, format))
                .map_err(|e| Error::Icon {
                    path: icon.path().to_path_buf(),
                    source: Box::new(e),
                })?;

            code.add_file(GeneratedFile::new(format!("{name}.js"), source.code));
            code.add_file(GeneratedFile::new(
                format!("{name}.d.ts"),
                source.declaration,
            ));

            tracing::debug!("Generated {name}.js ({format})");
        }

        let names: Vec<&ComponentName> = icons.iter().map(IconAsset::component_name).collect();
        code.add_file(GeneratedFile::new("index.js", module_barrel(&names, format)));
        code.add_file(GeneratedFile::new("index.d.ts", declaration_barrel(&names)));

        tracing::debug!(
            "Generated {} files for {} icons ({format})",
            code.file_count(),
            icons.len()
        );

        Ok(code)
    }
}

/// Builds the `index.js` barrel for a module format.
///
/// One line per component, joined by `\n` with no trailing newline.
///
/// # Examples
///
/// ```
/// use iconpack_codegen::generator::module_barrel;
/// use iconpack_core::{ComponentName, ModuleFormat};
///
/// let a = ComponentName::from_file_name("a.svg").unwrap();
/// let b = ComponentName::from_file_name("b.svg").unwrap();
///
/// assert_eq!(
///     module_barrel(&[&a, &b], ModuleFormat::Cjs),
///     "module.exports.AIcon = require(\"./AIcon.js\")\nmodule.exports.BIcon = require(\"./BIcon.js\")"
/// );
/// ```
#[must_use]
pub fn module_barrel(names: &[&ComponentName], format: ModuleFormat) -> String {
    names
        .iter()
        .map(|name| match format {
            ModuleFormat::Esm => format!("export {{ default as {name} }} from './{name}.js'"),
            ModuleFormat::Cjs => format!("module.exports.{name} = require(\"./{name}.js\")"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the `index.d.ts` barrel, identical for both module formats.
#[must_use]
pub fn declaration_barrel(names: &[&ComponentName]) -> String {
    names
        .iter()
        .map(|name| format!("export {{ default as {name} }} from './{name}'"))
        .collect::<Vec<_>>()
        .join("\n")
}
