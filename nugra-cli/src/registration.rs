//! Backend module registration
//!
//! Generated entity modules have to be listed in the backend's root module
//! (`apps/backend/src/app.module.ts`):
//!
//! ```typescript
//! import { OrderModule } from './modules/order/order.module';
//!
//! @Module({
//!   imports: [ OrderModule],
//! })
//! export class AppModule {}
//! ```
//!
//! The file is parsed into a [`RegistrationDocument`]: its import statements
//! and the `imports: [...]` list literal with its top-level entries. Mutations
//! go through the document and are re-emitted by [`RegistrationDocument::render`],
//! leaving every other byte of the file untouched.
//!
//! Comments and string literals are never matched: a commented-out
//! `imports: [...]` is not the registration list, and comment text inside the
//! list is not an entry.

use regex::Regex;
use similar::TextDiff;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{NugraError, Result};
use crate::layout;
use crate::scaffold::TemplateHelpers;

static NAMED_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+(?:type\s+)?\{([^}]*)\}\s*from\s*['"]([^'"]+)['"]"#)
        .expect("named import pattern is valid")
});

static DEFAULT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+([A-Za-z_$][\w$]*)\s+from\s*['"]([^'"]+)['"]"#)
        .expect("default import pattern is valid")
});

static REGISTRATION_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bimports\s*:\s*\[").expect("registration list pattern is valid")
});

/// A parsed `import ... from '...'` statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Local names bound by the statement (`A as B` binds `B`)
    pub names: Vec<String>,
    /// Module specifier
    pub from: String,
}

/// Location and entries of the `imports: [...]` list literal
#[derive(Debug, Clone)]
struct RegistrationList {
    /// Byte offset just after `[`
    start: usize,
    /// Byte offset of the matching `]`
    end: usize,
    /// Top-level entries, trimmed
    entries: Vec<String>,
    /// Entries added since parsing
    added: Vec<String>,
}

/// Structured view of a registration source file
#[derive(Debug, Clone)]
pub struct RegistrationDocument {
    source: String,
    imports: Vec<ImportStatement>,
    prepended: Vec<String>,
    list: Option<RegistrationList>,
}

impl RegistrationDocument {
    /// Parse registration source text
    #[must_use]
    pub fn parse(source: &str) -> Self {
        Self {
            source: source.to_string(),
            imports: parse_imports(source),
            prepended: Vec::new(),
            list: find_registration_list(source),
        }
    }

    /// Import statements in source order (newly added imports first)
    #[must_use]
    pub fn imports(&self) -> &[ImportStatement] {
        &self.imports
    }

    /// Entries of the registration list, or `None` if the file has no list
    #[must_use]
    pub fn registrations(&self) -> Option<Vec<&str>> {
        self.list.as_ref().map(|list| {
            list.entries
                .iter()
                .chain(&list.added)
                .map(String::as_str)
                .collect()
        })
    }

    /// Whether the file has an `imports: [...]` list literal
    #[must_use]
    pub const fn has_registration_list(&self) -> bool {
        self.list.is_some()
    }

    /// Whether any import statement binds `name`
    #[must_use]
    pub fn imports_symbol(&self, name: &str) -> bool {
        self.imports
            .iter()
            .any(|import| import.names.iter().any(|n| n == name))
    }

    /// Whether `name` is an entry of the registration list
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.registrations()
            .is_some_and(|entries| entries.contains(&name))
    }

    /// Ensure `name` is imported from `from`, prepending an import line if needed
    ///
    /// Returns `true` if the document changed.
    pub fn ensure_import(&mut self, name: &str, from: &str) -> bool {
        if self.imports_symbol(name) {
            return false;
        }

        self.prepended
            .insert(0, format!("import {{ {name} }} from '{from}';\n"));
        self.imports.insert(
            0,
            ImportStatement {
                names: vec![name.to_string()],
                from: from.to_string(),
            },
        );
        true
    }

    /// Ensure `name` is an entry of the registration list
    ///
    /// Returns `Some(true)` if the document changed, `Some(false)` if the
    /// entry was already present and `None` if the file has no list.
    pub fn ensure_registered(&mut self, name: &str) -> Option<bool> {
        if self.is_registered(name) {
            return Some(false);
        }

        let list = self.list.as_mut()?;
        list.added.push(name.to_string());
        Some(true)
    }

    /// Re-emit the document as source text
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.prepended.concat();

        match &self.list {
            Some(list) => {
                out.push_str(&self.source[..list.start]);
                out.push_str(&render_list_body(
                    &self.source[list.start..list.end],
                    &list.added,
                ));
                out.push_str(&self.source[list.end..]);
            }
            None => out.push_str(&self.source),
        }

        out
    }
}

/// Result of planning or applying a registration patch
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    /// Registration file that was patched
    pub path: PathBuf,
    /// Module class (e.g. `OrderModule`)
    pub module_class: String,
    /// File content before patching
    pub original: String,
    /// File content after patching
    pub patched: String,
    /// Whether an import line was added
    pub import_added: bool,
    /// Whether a list entry was added
    pub registered: bool,
}

impl PatchOutcome {
    /// Whether patching changes the file
    #[must_use]
    pub fn changed(&self) -> bool {
        self.import_added || self.registered
    }

    /// Unified diff between original and patched content
    #[must_use]
    pub fn unified_diff(&self) -> String {
        let name = self.path.display().to_string();
        TextDiff::from_lines(&self.original, &self.patched)
            .unified_diff()
            .context_radius(3)
            .header(&name, &name)
            .to_string()
    }
}

/// Registers generated entity modules in the backend root module
#[derive(Debug, Clone)]
pub struct RegistrationPatcher {
    path: PathBuf,
}

impl RegistrationPatcher {
    /// Patcher for an explicit registration file
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Patcher for the registration file of the project at `project_root`
    #[must_use]
    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(layout::REGISTRATION_FILE))
    }

    /// Path of the registration file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compute the patch for `entity` without writing anything
    ///
    /// # Errors
    ///
    /// Returns [`NugraError::RegistrationFileMissing`] if the file does not
    /// exist and [`NugraError::RegistrationListNotFound`] if it has no
    /// `imports: [...]` list.
    pub fn plan(&self, entity: &str) -> Result<PatchOutcome> {
        if !self.path.exists() {
            return Err(NugraError::RegistrationFileMissing(self.path.clone()));
        }

        let original = fs::read_to_string(&self.path)?;
        let module_class = TemplateHelpers::module_class(entity);
        let mut document = RegistrationDocument::parse(&original);

        let registered =
            document
                .ensure_registered(&module_class)
                .ok_or_else(|| NugraError::RegistrationListNotFound {
                    path: self.path.clone(),
                    module: module_class.clone(),
                })?;
        let import_added =
            document.ensure_import(&module_class, &TemplateHelpers::module_import_path(entity));

        tracing::debug!(
            path = %self.path.display(),
            module = %module_class,
            import_added,
            registered,
            "planned registration patch"
        );

        Ok(PatchOutcome {
            path: self.path.clone(),
            patched: document.render(),
            module_class,
            original,
            import_added,
            registered,
        })
    }

    /// Patch the registration file for `entity`, writing only if it changes
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::plan`], or an I/O error if the write fails.
    pub fn apply(&self, entity: &str) -> Result<PatchOutcome> {
        let outcome = self.plan(entity)?;
        if outcome.changed() {
            fs::write(&self.path, &outcome.patched)?;
            tracing::info!(
                path = %self.path.display(),
                module = %outcome.module_class,
                "registered module"
            );
        }
        Ok(outcome)
    }
}

fn parse_imports(source: &str) -> Vec<ImportStatement> {
    let masked = masked_ranges(source);
    let visible = |offset: usize| !is_masked(&masked, offset);

    let mut imports: Vec<(usize, ImportStatement)> = NAMED_IMPORT
        .captures_iter(source)
        .filter_map(|caps| {
            let offset = caps.get(1)?.start();
            visible(offset).then(|| {
                let names = caps[1]
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| {
                        name.rsplit_once(" as ")
                            .map_or(name, |(_, alias)| alias.trim())
                            .to_string()
                    })
                    .collect();
                let import = ImportStatement {
                    names,
                    from: caps[2].to_string(),
                };
                (offset, import)
            })
        })
        .collect();

    imports.extend(DEFAULT_IMPORT.captures_iter(source).filter_map(|caps| {
        let offset = caps.get(1)?.start();
        visible(offset).then(|| {
            let import = ImportStatement {
                names: vec![caps[1].to_string()],
                from: caps[2].to_string(),
            };
            (offset, import)
        })
    }));

    imports.sort_by_key(|(offset, _)| *offset);
    imports.into_iter().map(|(_, import)| import).collect()
}

fn find_registration_list(source: &str) -> Option<RegistrationList> {
    let masked = masked_ranges(source);
    let open = REGISTRATION_LIST
        .find_iter(source)
        .find(|m| !is_masked(&masked, m.start()))?;
    let start = open.end();
    let end = find_closing_bracket(source, start)?;
    let entries = scan_list_body(&source[start..end])
        .entries
        .into_iter()
        .map(|entry| entry.text)
        .collect();

    Some(RegistrationList {
        start,
        end,
        entries,
        added: Vec::new(),
    })
}

/// A lexical piece of TypeScript source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// One byte of code outside strings and comments
    Code(usize, u8),
    /// String or template literal, `start..end`
    Str(usize, usize),
    /// Line or block comment, `start..end`
    Comment(usize, usize),
}

/// Iterator over the [`Token`]s of a source text
struct Tokens<'a> {
    source: &'a str,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        let byte = *bytes.get(start)?;

        let token = match byte {
            b'\'' | b'"' | b'`' => Token::Str(start, skip_string(bytes, start)),
            b'/' => comment_end(self.source, start)
                .map_or(Token::Code(start, byte), |end| Token::Comment(start, end)),
            _ => Token::Code(start, byte),
        };

        self.pos = match token {
            Token::Code(i, _) => i + 1,
            Token::Str(_, end) | Token::Comment(_, end) => end,
        };
        Some(token)
    }
}

const fn tokens(source: &str, from: usize) -> Tokens<'_> {
    Tokens { source, pos: from }
}

/// Byte ranges covered by comments and string literals
fn masked_ranges(source: &str) -> Vec<(usize, usize)> {
    tokens(source, 0)
        .filter_map(|token| match token {
            Token::Str(start, end) | Token::Comment(start, end) => Some((start, end)),
            Token::Code(..) => None,
        })
        .collect()
}

fn is_masked(ranges: &[(usize, usize)], offset: usize) -> bool {
    ranges
        .iter()
        .any(|&(start, end)| (start..end).contains(&offset))
}

/// Byte offset of the `]` closing a list whose body starts at `start`
///
/// Skips nested brackets, string literals and comments.
fn find_closing_bracket(source: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;

    for token in tokens(source, start) {
        if let Token::Code(i, byte) = token {
            match byte {
                b'[' | b'(' | b'{' => depth += 1,
                b']' if depth == 0 => return Some(i),
                b']' | b')' | b'}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
    }

    None
}

/// If a comment starts at `i`, the offset just past it
///
/// Line comments end before their newline; unterminated block comments run to
/// the end of the source.
fn comment_end(source: &str, i: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    match bytes.get(i + 1) {
        Some(b'/') => Some(
            bytes[i..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(bytes.len(), |p| i + p),
        ),
        Some(b'*') => Some(
            source[i + 2..]
                .find("*/")
                .map_or(bytes.len(), |p| i + 2 + p + 2),
        ),
        _ => None,
    }
}

/// Offset just past the string literal opening at `open`
fn skip_string(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b if b == quote => return i + 1,
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// A top-level entry of a list body
#[derive(Debug, Clone, PartialEq, Eq)]
struct ListEntry {
    /// Entry source with comments removed, trimmed
    text: String,
    /// Offset of the first code byte
    start: usize,
    /// Offset just past the last code byte
    end: usize,
}

/// Top-level structure of a list body
#[derive(Debug, Default)]
struct ListBody {
    entries: Vec<ListEntry>,
    /// Offset of a comma following the last entry
    trailing_comma: Option<usize>,
}

/// Split a list body into entries on commas outside brackets, strings and
/// comments
fn scan_list_body(body: &str) -> ListBody {
    let mut scan = ListBody::default();
    let mut comments = Vec::new();
    let mut depth = 0usize;
    let mut span: Option<(usize, usize)> = None;

    for token in tokens(body, 0) {
        let (start, end) = match token {
            Token::Comment(start, end) => {
                comments.push((start, end));
                continue;
            }
            Token::Str(start, end) => (start, end),
            Token::Code(i, byte) => {
                match byte {
                    b'[' | b'(' | b'{' => depth += 1,
                    b']' | b')' | b'}' => depth = depth.saturating_sub(1),
                    b',' if depth == 0 => {
                        if let Some(span) = span.take() {
                            scan.entries.push(list_entry(body, span, &comments));
                            scan.trailing_comma = Some(i);
                        }
                        continue;
                    }
                    b if b.is_ascii_whitespace() => continue,
                    _ => {}
                }
                (i, i + 1)
            }
        };
        scan.trailing_comma = None;
        span = Some(span.map_or((start, end), |(first, _)| (first, end)));
    }

    if let Some(span) = span {
        scan.entries.push(list_entry(body, span, &comments));
    }
    scan
}

fn list_entry(
    body: &str,
    (start, end): (usize, usize),
    comments: &[(usize, usize)],
) -> ListEntry {
    let mut text = String::new();
    let mut pos = start;
    for &(skip_from, skip_to) in comments
        .iter()
        .filter(|(skip_from, _)| (start..end).contains(skip_from))
    {
        text.push_str(&body[pos..skip_from]);
        text.push(' ');
        pos = skip_to;
    }
    text.push_str(&body[pos..end]);

    ListEntry {
        text: text.trim().to_string(),
        start,
        end,
    }
}

/// Leading whitespace of the line containing `offset`
fn line_indent(source: &str, offset: usize) -> &str {
    let line_start = source[..offset].rfind('\n').map_or(0, |p| p + 1);
    let line = &source[line_start..];
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

/// Render a list body with `added` entries appended, preserving layout
///
/// - empty: `[]` -> `[ OrderModule]`
/// - single line: `[A, B]` -> `[A, B, OrderModule]`
/// - multi line: one entry per line, indented like the last existing entry
///
/// Separating commas go right after the last entry's code, never into a
/// trailing comment.
fn render_list_body(body: &str, added: &[String]) -> String {
    if added.is_empty() {
        return body.to_string();
    }

    let scan = scan_list_body(body);
    let content_end = body.trim_end().len();
    let (content, trailing) = body.split_at(content_end);

    let Some(last) = scan.entries.last() else {
        if content.trim().is_empty() {
            return format!(" {}", added.join(", "));
        }
        // Only comments: add after them
        if !content.contains('\n') {
            return format!("{content} {}{trailing}", added.join(", "));
        }
        let indent = line_indent(content, content.len());
        let separator = format!(",\n{indent}");
        return format!("{content}\n{indent}{}{trailing}", added.join(separator.as_str()));
    };

    if !body.contains('\n') {
        let rest = scan.trailing_comma.map_or(last.end, |comma| comma + 1);
        return format!("{}, {}{}", &body[..last.end], added.join(", "), &body[rest..]);
    }

    let indent = line_indent(body, last.start);
    let mut out = String::new();
    if scan.trailing_comma.is_some() {
        out.push_str(content);
    } else {
        out.push_str(&body[..last.end]);
        out.push(',');
        out.push_str(&content[last.end..]);
    }
    for (idx, name) in added.iter().enumerate() {
        out.push('\n');
        out.push_str(indent);
        out.push_str(name);
        if scan.trailing_comma.is_some() || idx + 1 < added.len() {
            out.push(',');
        }
    }
    out.push_str(trailing);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_MODULE: &str = "import { Module } from '@nestjs/common';\n\n\
        @Module({\n  imports: [],\n  controllers: [],\n  providers: [],\n})\n\
        export class AppModule {}\n";

    const ORDER_IMPORT: &str = "import { OrderModule } from './modules/order/order.module';\n";

    fn register(source: &str, class: &str, path: &str) -> String {
        let mut doc = RegistrationDocument::parse(source);
        doc.ensure_registered(class).expect("list present");
        doc.ensure_import(class, path);
        doc.render()
    }

    fn register_order(source: &str) -> String {
        register(source, "OrderModule", "./modules/order/order.module")
    }

    #[test]
    fn test_empty_list() {
        let out = register_order(APP_MODULE);
        assert!(out.contains("imports: [ OrderModule],"));
        assert!(out.starts_with(&format!("{ORDER_IMPORT}import {{ Module }}")));
    }

    #[test]
    fn test_single_line_list() {
        let source = "@Module({ imports: [UserModule] })\nexport class AppModule {}\n";
        let out = register_order(source);
        assert!(out.contains("imports: [UserModule, OrderModule] })"));
    }

    #[test]
    fn test_single_line_list_with_trailing_comma() {
        let source = "@Module({ imports: [UserModule,] })";
        let out = register(source, "OrderModule", "./o");
        assert!(out.contains("imports: [UserModule, OrderModule] })"));
    }

    #[test]
    fn test_multi_line_list_keeps_layout() {
        let source =
            "@Module({\n  imports: [\n    ConfigModule.forRoot(),\n    UserModule,\n  ],\n})\n";
        let out = register(source, "OrderModule", "./o");
        assert!(out.contains("    UserModule,\n    OrderModule,\n  ],"), "{out}");
    }

    #[test]
    fn test_multi_line_list_without_trailing_comma() {
        let source = "@Module({\n  imports: [\n    UserModule\n  ],\n})\n";
        let out = register(source, "OrderModule", "./o");
        assert!(out.contains("    UserModule,\n    OrderModule\n  ],"), "{out}");
    }

    #[test]
    fn test_nested_brackets_inside_list() {
        let source = "@Module({\n  imports: [TypeOrmModule.forRoot({ \
            entities: [__dirname + '/**/*.model.{ts,js}'] })],\n})\n";
        let doc = RegistrationDocument::parse(source);
        assert_eq!(
            doc.registrations().unwrap(),
            vec!["TypeOrmModule.forRoot({ entities: [__dirname + '/**/*.model.{ts,js}'] })"]
        );

        let out = register(source, "OrderModule", "./o");
        assert!(out.contains("'] }), OrderModule],"), "{out}");
    }

    #[test]
    fn test_brackets_in_strings_and_comments() {
        let source = "@Module({ imports: [A /* ] */, B('x]y'), // ]\n C] })";
        let doc = RegistrationDocument::parse(source);
        assert_eq!(doc.registrations().unwrap(), vec!["A", "B('x]y')", "C"]);
    }

    #[test]
    fn test_list_inside_comment_is_skipped() {
        let source = "// example: imports: [FooModule]\n/* imports: [BarModule] */\n\
            @Module({\n  imports: [UserModule],\n})\nexport class AppModule {}\n";
        let doc = RegistrationDocument::parse(source);
        assert_eq!(doc.registrations().unwrap(), vec!["UserModule"]);

        let out = register_order(source);
        assert!(out.contains("// example: imports: [FooModule]\n"), "{out}");
        assert!(out.contains("/* imports: [BarModule] */"), "{out}");
        assert!(out.contains("  imports: [UserModule, OrderModule],"), "{out}");
    }

    #[test]
    fn test_commented_list_only_is_missing() {
        let mut doc = RegistrationDocument::parse(
            "// @Module({ imports: [] })\nconst s = 'imports: []';\nexport class AppModule {}\n",
        );
        assert!(!doc.has_registration_list());
        assert_eq!(doc.ensure_registered("OrderModule"), None);
    }

    #[test]
    fn test_comma_goes_before_trailing_line_comment() {
        let source = "@Module({\n  imports: [\n    UserModule // users\n  ],\n})\n";
        let out = register(source, "OrderModule", "./o");
        assert!(
            out.contains("    UserModule, // users\n    OrderModule\n  ],"),
            "{out}"
        );
    }

    #[test]
    fn test_trailing_comma_followed_by_comment() {
        let source = "@Module({\n  imports: [\n    UserModule, // users\n  ],\n})\n";
        let out = register(source, "OrderModule", "./o");
        assert!(
            out.contains("    UserModule, // users\n    OrderModule,\n  ],"),
            "{out}"
        );
    }

    #[test]
    fn test_comment_only_list_counts_as_empty() {
        let source = "@Module({ imports: [ /* none yet */ ] })";
        let doc = RegistrationDocument::parse(source);
        assert!(doc.registrations().unwrap().is_empty());

        let out = register(source, "OrderModule", "./o");
        assert!(out.contains("imports: [ /* none yet */ OrderModule ] })"), "{out}");
        assert!(!out.contains("*/,"), "{out}");
    }

    #[test]
    fn test_comment_only_multi_line_list() {
        let source = "@Module({\n  imports: [\n    // modules go here\n  ],\n})\n";
        let out = register(source, "OrderModule", "./o");
        assert!(
            out.contains("    // modules go here\n    OrderModule\n  ],"),
            "{out}"
        );
    }

    #[test]
    fn test_commented_out_entry_is_not_registered() {
        let source = "@Module({ imports: [UserModule /* , OrderModule */] })";
        let mut doc = RegistrationDocument::parse(source);
        assert!(!doc.is_registered("OrderModule"));
        assert_eq!(doc.ensure_registered("OrderModule"), Some(true));
        assert!(doc.render().contains("[UserModule, OrderModule /* , OrderModule */]"));
    }

    #[test]
    fn test_duplicate_detection_is_by_identifier() {
        let source =
            "import { SubOrderModule } from './sub';\n@Module({ imports: [SubOrderModule] })";
        let mut doc = RegistrationDocument::parse(source);
        assert!(!doc.imports_symbol("OrderModule"));
        assert!(!doc.is_registered("OrderModule"));
        assert_eq!(doc.ensure_registered("OrderModule"), Some(true));
        assert!(doc.ensure_import("OrderModule", "./o"));
    }

    #[test]
    fn test_already_registered_is_untouched() {
        let source = format!("{ORDER_IMPORT}@Module({{ imports: [OrderModule] }})");
        let mut doc = RegistrationDocument::parse(&source);
        assert_eq!(doc.ensure_registered("OrderModule"), Some(false));
        assert!(!doc.ensure_import("OrderModule", "./modules/order/order.module"));
        assert_eq!(doc.render(), source);
    }

    #[test]
    fn test_missing_list() {
        let mut doc = RegistrationDocument::parse("export class AppModule {}\n");
        assert!(!doc.has_registration_list());
        assert_eq!(doc.ensure_registered("OrderModule"), None);
    }

    #[test]
    fn test_import_parsing() {
        let source = "import { Module, Global as G } from '@nestjs/common';\n\
            import type { Foo } from \"./foo\";\n\
            import dotenv from 'dotenv';\n\
            import {\n  A,\n  B,\n} from './ab';\n\
            /*\nimport { Hidden } from './hidden';\n*/\n";
        let doc = RegistrationDocument::parse(source);
        let imports = doc.imports();
        assert_eq!(imports.len(), 4);
        assert_eq!(imports[0].names, vec!["Module", "G"]);
        assert_eq!(imports[0].from, "@nestjs/common");
        assert_eq!(imports[1].names, vec!["Foo"]);
        assert_eq!(imports[2].names, vec!["dotenv"]);
        assert_eq!(imports[3].names, vec!["A", "B"]);
        assert!(doc.imports_symbol("G"));
        assert!(!doc.imports_symbol("Global"));
        assert!(!doc.imports_symbol("Hidden"));
    }

    #[test]
    fn test_render_without_changes_is_identity() {
        let doc = RegistrationDocument::parse(APP_MODULE);
        assert_eq!(doc.render(), APP_MODULE);
    }

    #[test]
    fn test_patcher_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let patcher = RegistrationPatcher::for_project(dir.path());
        assert!(matches!(
            patcher.plan("order"),
            Err(NugraError::RegistrationFileMissing(_))
        ));
    }

    #[test]
    fn test_patcher_reports_missing_list_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.module.ts");
        let source = "export class AppModule {}\n";
        fs::write(&path, source).unwrap();

        let err = RegistrationPatcher::new(path.clone()).apply("order").unwrap_err();
        assert!(matches!(
            err,
            NugraError::RegistrationListNotFound { ref module, .. } if module == "OrderModule"
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), source);
    }

    #[test]
    fn test_outcome_diff() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.module.ts");
        fs::write(&path, APP_MODULE).unwrap();

        let outcome = RegistrationPatcher::new(path).plan("order").unwrap();
        assert!(outcome.changed());
        let diff = outcome.unified_diff();
        assert!(diff.contains("+import { OrderModule } from './modules/order/order.module';"));
        assert!(diff.contains("+  imports: [ OrderModule],"));
        assert!(diff.contains("-  imports: [],"));
    }
}
