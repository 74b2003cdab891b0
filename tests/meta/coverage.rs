//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();

                let relative_path = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative_path);
                    paths.extend(collect_relative_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative_path);
                }
            }
        }

        Ok(paths)
    }

    fn source_and_unit_paths() -> (HashSet<String>, HashSet<String>) {
        let src_dir = Path::new(SRC_DIR);
        let unit_dir = Path::new(UNIT_DIR);

        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
            assert!(src_dir.exists(), "Failed to read src directory: {error}");
            HashSet::new()
        });
        let unit_paths = collect_relative_paths(unit_dir, unit_dir).unwrap_or_default();

        (src_paths, unit_paths)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let mut missing: Vec<&String> = src_paths
            .iter()
            // Entry points and module organization files don't require separate test files
            .filter(|path| {
                !(path.as_str() == "main.rs" || path.as_str() == "lib.rs" || path.ends_with("mod.rs"))
            })
            .filter(|path| !unit_paths.contains(*path))
            .collect();
        missing.sort();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = source_and_unit_paths();

        let mut orphaned: Vec<&String> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();
        orphaned.sort();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Unit files are only compiled when their directory's mod.rs declares them
    #[test]
    fn test_unit_files_are_declared() {
        let (_, unit_paths) = source_and_unit_paths();
        let mut undeclared = Vec::new();

        for path in &unit_paths {
            let relative = Path::new(path);
            if relative.extension().and_then(|ext| ext.to_str()) != Some("rs")
                || path.ends_with("mod.rs")
            {
                continue;
            }

            let Some(stem) = relative.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let parent = relative.parent().unwrap_or_else(|| Path::new(""));
            let mod_file = Path::new(UNIT_DIR).join(parent).join("mod.rs");
            let declared = fs::read_to_string(&mod_file)
                .map(|content| content.contains(&format!("mod {stem};")))
                .unwrap_or(false);

            if !declared {
                undeclared.push(format!("  - tests/unit/{path} (not declared in {})", mod_file.display()));
            }
        }
        undeclared.sort();

        assert!(
            undeclared.is_empty(),
            "The following unit test files are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, &mut files_without_tests) {
            assert!(tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                // Module organization files are excluded from the test requirement
                if path.file_name().and_then(|name| name.to_str()) == Some("mod.rs") {
                    continue;
                }

                if !fs::read_to_string(&path)?.contains("#[test]") {
                    files_without_tests.push(format!("  - {}", path.display()));
                }
            }
        }

        Ok(())
    }
}
