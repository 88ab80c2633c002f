use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_MODULES: [&str; 5] =
    ["event", "model", "reducer", "state", "view"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let declared_widgets = declared_modules(&mod_rs, &mut violations);

    let mut fs_widgets = BTreeSet::new();
    for path in read_dir_paths(&widgets_dir) {
        if path.is_dir() {
            fs_widgets.insert(file_stem(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs")
            && file_stem(&path) != "mod"
        {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_widgets != fs_widgets {
        violations.push(format!(
            "{}: declared widgets {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_widgets,
            fs_widgets
        ));
    }

    for widget in &declared_widgets {
        validate_widget_dir(&widgets_dir.join(widget), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(widget_dir: &Path, violations: &mut Vec<String>) {
    let mod_rs = widget_dir.join("mod.rs");
    let modules = declared_modules(&mod_rs, violations);

    for required in REQUIRED_WIDGET_MODULES {
        if !modules.contains(required) {
            violations.push(format!(
                "{}: missing pub(crate) mod {required};",
                mod_rs.display()
            ));
        }
    }

    for module in ["reducer", "state"] {
        let path = widget_dir.join(format!("{module}.rs"));
        validate_pure_file(&path, violations);
    }

    let view_dir = widget_dir.join("view");
    let view_modules = declared_modules(&view_dir.join("mod.rs"), violations);
    for module in &view_modules {
        validate_view_file(&view_dir.join(format!("{module}.rs")), violations);
    }
}

/// Reducers and state hold no IO and read no clocks.
fn validate_pure_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read_source(file_path);

    for forbidden in [
        "reqwest",
        "std::fs::",
        "Task::perform",
        "Local::now",
        "Utc::now",
        "crate::app::",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read_source(file_path);
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    });
    let expected_props = format!("{}Props", pascal_case(&file_stem(file_path)));

    for forbidden in ["log::", "Task::", "std::fs::", "reqwest"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut has_view = false;
    let mut has_props = false;
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    has_view = true;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct)
                if item_struct.ident == expected_props =>
            {
                has_props = true;
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if !has_view {
        violations.push(format!(
            "{}: missing pub(crate) fn view",
            file_path.display()
        ));
    }
    if !has_props {
        violations.push(format!(
            "{}: missing {expected_props} struct",
            file_path.display()
        ));
    }
}

/// Collect out-of-line `mod` declarations, flagging globs and inline modules.
fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let source = read_source(mod_rs);
    let file = syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", mod_rs.display())
    });

    let mut modules = BTreeSet::new();
    for item in &file.items {
        match item {
            Item::Mod(item_mod) if item_mod.content.is_none() => {
                modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => {
                violations.push(format!(
                    "{}: inline module '{}' is forbidden",
                    mod_rs.display(),
                    item_mod.ident
                ));
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    modules
}

fn read_source(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn read_dir_paths(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn pascal_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}
