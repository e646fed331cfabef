//! The export pipeline: scan, resolve, look up, normalize, accumulate,
//! render, write. Both commands are thin specializations of this module.

use crate::emit;
use crate::error::Result;
use crate::php::{self, DeclKind};
use crate::policy;
use crate::registry;
use crate::scan;
use crate::types::{Member, MemberValue};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Explicit configuration for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub source_root: PathBuf,
    pub output_path: PathBuf,
    pub suffix: String,
    pub emit_declarations: bool,
    pub ignore_list: Vec<String>,
}

/// Which flavor of export a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Enums,
    Constants,
}

impl ExportKind {
    fn decl_kind(self) -> DeclKind {
        match self {
            ExportKind::Enums => DeclKind::Enum,
            ExportKind::Constants => DeclKind::Class,
        }
    }
}

/// One exported object: output name plus ordered members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    pub name: String,
    pub members: Vec<Member>,
}

/// Ordered mapping of output name to members. Insertion order is the
/// directory-walk order of the types that produced the entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSet {
    entries: Vec<ExportEntry>,
}

impl ExportSet {
    /// Inserts an entry. A duplicate output name silently takes over the
    /// existing entry's members while keeping its position, like overwriting
    /// a PHP array key.
    pub fn insert(&mut self, name: String, members: Vec<Member>) {
        if let Some(existing) = self.entries.iter_mut().find(|entry| entry.name == name) {
            existing.members = members;
        } else {
            self.entries.push(ExportEntry { name, members });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a run: either nothing eligible was found (and nothing was
/// written), or the module file and optionally the declaration file were.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Written {
        module: PathBuf,
        declarations: Option<PathBuf>,
    },
}

/// Walks the source root and accumulates every resolvable, registered type
/// into an [`ExportSet`]. Per-file failures (no declaration, unregistered
/// type, unreadable file) are skipped silently.
pub fn collect(kind: ExportKind, options: &ExportOptions) -> Result<ExportSet> {
    let files = scan::php_files(&options.source_root)?;
    debug!(
        "Scanning {} source file(s) under {}",
        files.len(),
        options.source_root.display()
    );

    let mut set = ExportSet::default();
    for file in files {
        let source = match fs::read_to_string(&file) {
            Ok(source) => source,
            Err(e) => {
                debug!("Skipping unreadable file {}: {}", file.display(), e);
                continue;
            }
        };

        let Some(type_name) = php::qualified_type_name(&source, kind.decl_kind()) else {
            trace!("No qualified declaration in {}", file.display());
            continue;
        };

        let Some(members) = members_for(kind, &type_name, &options.ignore_list) else {
            trace!("Type {} is not registered for export, skipping", type_name);
            continue;
        };
        if members.is_empty() {
            trace!("Type {} has no members left to export", type_name);
            continue;
        }

        let output_name = policy::output_name(short_name(&type_name), &options.suffix);
        trace!("Collected {} as {}", type_name, output_name);
        set.insert(output_name, members);
    }

    Ok(set)
}

/// Runs the full pipeline and writes the output file(s).
pub fn run(kind: ExportKind, options: &ExportOptions) -> Result<Outcome> {
    let set = collect(kind, options)?;
    if set.is_empty() {
        return Ok(Outcome::Empty);
    }
    info!("Collected {} export entr(ies)", set.len());

    let module_text = emit::javascript::generate_module_string(&set);
    fs::write(&options.output_path, module_text)?;

    let declarations = if options.emit_declarations {
        let path = declaration_path(&options.output_path);
        let text =
            emit::typescript::generate_declaration_string(&set, kind == ExportKind::Enums);
        fs::write(&path, text)?;
        Some(path)
    } else {
        None
    };

    Ok(Outcome::Written {
        module: options.output_path.clone(),
        declarations,
    })
}

/// Declaration file path for a module path. Every `.js` occurrence in the
/// string is replaced, not only the final extension.
pub fn declaration_path(output: &Path) -> PathBuf {
    PathBuf::from(output.to_string_lossy().replace(".js", ".d.ts"))
}

fn members_for(kind: ExportKind, type_name: &str, ignore_list: &[String]) -> Option<Vec<Member>> {
    match kind {
        ExportKind::Enums => registry::enum_cases(type_name).map(|cases| {
            cases
                .into_iter()
                .filter(|case| !policy::is_ignored(&case.name, ignore_list))
                .map(|case| {
                    let value = case.value.unwrap_or_else(|| {
                        MemberValue::Str(policy::default_case_value(&case.name))
                    });
                    Member::new(case.name, value)
                })
                .collect()
        }),
        ExportKind::Constants => registry::class_constants(type_name).map(|fields| {
            fields
                .into_iter()
                .map(|field| Member::new(field.name, field.value))
                .collect()
        }),
    }
}

fn short_name(type_name: &str) -> &str {
    match type_name.rfind(php::NAMESPACE_SEPARATOR) {
        Some(index) => &type_name[index + 1..],
        None => type_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{
        CONSTANT_EXPORTS, ConstantExportEntry, ENUM_EXPORTS, EnumExportEntry, REGISTRY_ABI,
    };
    use crate::types::{ConstantField, EnumCase};
    use linkme::distributed_slice;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[distributed_slice(ENUM_EXPORTS)]
    static EXPORT_TEST_ORDER_STATE: EnumExportEntry = EnumExportEntry {
        abi: REGISTRY_ABI,
        type_name: r"App\ExportTests\OrderState",
        cases: order_state_cases,
    };

    fn order_state_cases() -> Vec<EnumCase> {
        vec![
            EnumCase::unit("Draft"),
            EnumCase::string("Shipped", "shipped"),
        ]
    }

    #[distributed_slice(ENUM_EXPORTS)]
    static EXPORT_TEST_AUDIT: EnumExportEntry = EnumExportEntry {
        abi: REGISTRY_ABI,
        type_name: r"App\ExportTests\AuditColumns",
        cases: audit_cases,
    };

    fn audit_cases() -> Vec<EnumCase> {
        vec![
            EnumCase::string("CREATED_AT", "created_at"),
            EnumCase::unit("Actor"),
            EnumCase::string("UPDATED_AT", "updated_at"),
        ]
    }

    #[distributed_slice(ENUM_EXPORTS)]
    static EXPORT_TEST_TIMESTAMPS_ONLY: EnumExportEntry = EnumExportEntry {
        abi: REGISTRY_ABI,
        type_name: r"App\ExportTests\TimestampsOnly",
        cases: timestamps_only_cases,
    };

    fn timestamps_only_cases() -> Vec<EnumCase> {
        vec![
            EnumCase::string("CREATED_AT", "created_at"),
            EnumCase::string("UPDATED_AT", "updated_at"),
        ]
    }

    #[distributed_slice(CONSTANT_EXPORTS)]
    static EXPORT_TEST_USER_MODEL: ConstantExportEntry = ConstantExportEntry {
        abi: REGISTRY_ABI,
        type_name: r"App\ExportTests\User",
        constants: user_constants,
    };

    fn user_constants() -> Vec<ConstantField> {
        vec![
            ConstantField::string("STATUS_ACTIVE", "active"),
            ConstantField::int("MAX_LOGIN_ATTEMPTS", 5),
            ConstantField::null("LEGACY_FLAG"),
        ]
    }

    fn write_php(dir: &Path, relative: &str, namespace: &str, keyword: &str, name: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(
            path,
            format!("<?php\n\nnamespace {namespace};\n\n{keyword} {name}\n{{\n}}\n"),
        )
        .unwrap();
    }

    fn enum_options(root: &Path) -> ExportOptions {
        ExportOptions {
            source_root: root.to_path_buf(),
            output_path: root.join("enums.js"),
            suffix: String::new(),
            emit_declarations: false,
            ignore_list: vec!["CREATED_AT".to_string(), "UPDATED_AT".to_string()],
        }
    }

    #[test]
    fn test_insert_is_last_write_wins_in_place() {
        let mut set = ExportSet::default();
        set.insert(
            "Alpha".to_string(),
            vec![Member::new("A", MemberValue::Int(1))],
        );
        set.insert(
            "Color".to_string(),
            vec![Member::new("Red", MemberValue::Str("red".into()))],
        );
        set.insert(
            "Color".to_string(),
            vec![Member::new("Blue", MemberValue::Str("blue".into()))],
        );

        let names: Vec<&str> = set.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Color"]);
        let color = set.iter().find(|entry| entry.name == "Color").unwrap();
        assert_eq!(color.members, vec![Member::new("Blue", MemberValue::Str("blue".into()))]);
    }

    #[test]
    fn test_collect_resolves_registered_enums_and_synthesizes_values() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "OrderState.php", r"App\ExportTests", "enum", "OrderState");

        let set = collect(ExportKind::Enums, &enum_options(dir.path())).unwrap();
        assert_eq!(set.len(), 1);
        let entry = set.iter().next().unwrap();
        assert_eq!(entry.name, "OrderState");
        assert_eq!(
            entry.members,
            vec![
                Member::new("Draft", MemberValue::Str("draft".into())),
                Member::new("Shipped", MemberValue::Str("shipped".into())),
            ]
        );
    }

    #[test]
    fn test_collect_applies_the_suffix() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "OrderState.php", r"App\ExportTests", "enum", "OrderState");

        let mut options = enum_options(dir.path());
        options.suffix = "Enum".to_string();
        let set = collect(ExportKind::Enums, &options).unwrap();
        assert_eq!(set.iter().next().unwrap().name, "OrderStateEnum");
    }

    #[test]
    fn test_collect_filters_ignored_members() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "AuditColumns.php", r"App\ExportTests", "enum", "AuditColumns");

        let set = collect(ExportKind::Enums, &enum_options(dir.path())).unwrap();
        let entry = set.iter().next().unwrap();
        assert_eq!(
            entry.members,
            vec![Member::new("Actor", MemberValue::Str("actor".into()))]
        );
    }

    #[test]
    fn test_types_left_empty_by_the_filter_are_skipped() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "TimestampsOnly.php", r"App\ExportTests", "enum", "TimestampsOnly");

        let set = collect(ExportKind::Enums, &enum_options(dir.path())).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unregistered_types_are_skipped_silently() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "Unknown.php", r"App\ExportTests", "enum", "Unknown");
        write_php(dir.path(), "OrderState.php", r"App\ExportTests", "enum", "OrderState");

        let set = collect(ExportKind::Enums, &enum_options(dir.path())).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().name, "OrderState");
    }

    #[test]
    fn test_collect_constants_keeps_registered_order_and_values() {
        let dir = TempDir::new().unwrap();
        write_php(dir.path(), "User.php", r"App\ExportTests", "class", "User");

        let mut options = enum_options(dir.path());
        options.suffix = "Model".to_string();
        let set = collect(ExportKind::Constants, &options).unwrap();
        let entry = set.iter().next().unwrap();
        assert_eq!(entry.name, "UserModel");
        assert_eq!(
            entry.members,
            vec![
                Member::new("STATUS_ACTIVE", MemberValue::Str("active".into())),
                Member::new("MAX_LOGIN_ATTEMPTS", MemberValue::Int(5)),
                Member::new("LEGACY_FLAG", MemberValue::Null),
            ]
        );
    }

    #[test]
    fn test_missing_source_root_aborts_the_run() {
        let dir = TempDir::new().unwrap();
        let mut options = enum_options(&dir.path().join("Enums"));
        options.output_path = dir.path().join("enums.js");

        assert!(run(ExportKind::Enums, &options).is_err());
        assert!(!options.output_path.exists());
    }

    #[test]
    fn test_run_with_nothing_found_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let source_root = dir.path().join("Enums");
        fs::create_dir_all(&source_root).unwrap();

        let mut options = enum_options(&source_root);
        options.output_path = dir.path().join("enums.js");
        assert_eq!(run(ExportKind::Enums, &options).unwrap(), Outcome::Empty);
        assert!(!options.output_path.exists());
    }

    #[test]
    fn test_run_writes_module_and_declarations() {
        let dir = TempDir::new().unwrap();
        let source_root = dir.path().join("Enums");
        fs::create_dir_all(&source_root).unwrap();
        write_php(&source_root, "OrderState.php", r"App\ExportTests", "enum", "OrderState");

        let mut options = enum_options(&source_root);
        options.output_path = dir.path().join("enums.js");
        options.emit_declarations = true;

        let outcome = run(ExportKind::Enums, &options).unwrap();
        let declaration = dir.path().join("enums.d.ts");
        assert_eq!(
            outcome,
            Outcome::Written {
                module: options.output_path.clone(),
                declarations: Some(declaration.clone()),
            }
        );

        let module = fs::read_to_string(&options.output_path).unwrap();
        assert_eq!(
            module,
            "export const OrderState = {\n    \"Draft\": \"draft\",\n    \"Shipped\": \"shipped\"\n};\n\n"
        );
        let declarations = fs::read_to_string(&declaration).unwrap();
        assert_eq!(
            declarations,
            "export declare const OrderState: {\n  readonly Draft: string;\n  readonly Shipped: string;\n};\n\n"
        );
    }

    #[test]
    fn test_runs_are_idempotent() {
        let dir = TempDir::new().unwrap();
        let source_root = dir.path().join("Enums");
        fs::create_dir_all(&source_root).unwrap();
        write_php(&source_root, "OrderState.php", r"App\ExportTests", "enum", "OrderState");

        let mut options = enum_options(&source_root);
        options.output_path = dir.path().join("enums.js");
        options.emit_declarations = true;

        run(ExportKind::Enums, &options).unwrap();
        let first_module = fs::read(&options.output_path).unwrap();
        let first_decl = fs::read(dir.path().join("enums.d.ts")).unwrap();

        run(ExportKind::Enums, &options).unwrap();
        assert_eq!(fs::read(&options.output_path).unwrap(), first_module);
        assert_eq!(fs::read(dir.path().join("enums.d.ts")).unwrap(), first_decl);
    }

    #[test]
    fn test_declaration_path_replaces_every_js_occurrence() {
        assert_eq!(
            declaration_path(Path::new("resources/js/enums.js")),
            PathBuf::from("resources/js/enums.d.ts")
        );
        assert_eq!(
            declaration_path(Path::new("dist.js/enums.js")),
            PathBuf::from("dist.d.ts/enums.d.ts")
        );
    }

    #[test]
    fn test_short_name_strips_the_namespace() {
        assert_eq!(short_name(r"App\Enums\Status"), "Status");
        assert_eq!(short_name("Status"), "Status");
    }
}
