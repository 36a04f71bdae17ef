//! Integration tests that compile the generated function with a real C++
//! compiler and check that every embedded byte comes back unchanged.
//!
//! The compiler is taken from `CXX`, falling back to `c++`. When none is
//! installed the tests are skipped.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use assetgen_codegen::Generator;
use assetgen_core::{Asset, Config, ContentType, RegistrationKey};
use tempfile::TempDir;

/// Captures what the generated function registers as `(key, content)` pairs
/// and prints each as a decimal length line followed by the raw bytes.
const HARNESS: &str = r#"#include <cstddef>
#include <cstdio>
#include <memory>
#include <string>
#include <vector>

struct Registry {
    std::vector<std::string> entries;

    template <std::size_t K, std::size_t N>
    void add(const char (&key)[K], const char (&data)[N], const char *, long long) {
        entries.emplace_back(key, K - 1);
        entries.emplace_back(data, N - 1);
    }
};

#include "generated.inc"

int main() {
    auto registry = std::make_shared<Registry>();
    registerAll(registry);
    for (const auto &entry : registry->entries) {
        std::printf("%zu\n", entry.size());
        std::fwrite(entry.data(), 1, entry.size(), stdout);
    }
    return 0;
}
"#;

fn compiler() -> Option<(String, bool)> {
    let cxx = std::env::var("CXX").unwrap_or_else(|_| "c++".to_string());
    let output = Command::new(&cxx).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let is_clang = String::from_utf8_lossy(&output.stdout).contains("clang");
    Some((cxx, is_clang))
}

fn asset(path: &str, content: &[u8], modified: i64) -> Asset {
    let path = Path::new(path);
    Asset {
        key: RegistrationKey::new(Path::new("root"), path).expect("path under root"),
        content: content.to_vec(),
        content_type: ContentType::from_path(path),
        modified,
    }
}

/// Split the harness output back into the registered byte strings.
fn parse_entries(mut out: &[u8]) -> Vec<Vec<u8>> {
    let mut entries = Vec::new();
    while !out.is_empty() {
        let newline = out.iter().position(|&b| b == b'\n').expect("length line");
        let len: usize = std::str::from_utf8(&out[..newline])
            .unwrap()
            .parse()
            .unwrap();
        let start = newline + 1;
        entries.push(out[start..start + len].to_vec());
        out = &out[start + len..];
    }
    entries
}

/// Compile the generated function for `assets` and assert every key and
/// content survives the compiler byte for byte.
fn assert_round_trips_through_compiler(assets: &[Asset]) {
    let Some((cxx, is_clang)) = compiler() else {
        eprintln!("no C++ compiler found, skipping");
        return;
    };

    let generator = Generator::new(Config {
        root: PathBuf::from("root"),
        registry_type: "std::shared_ptr<Registry>".to_string(),
        registry_param: "reg".to_string(),
    });
    let generated = generator.render("registerAll", assets);

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(dir.join("generated.inc"), &generated).unwrap();
    fs::write(dir.join("harness.cpp"), HARNESS).unwrap();

    // Strict C++11 keeps trigraphs enabled, so an unguarded `??` would show.
    let mut compile = Command::new(&cxx);
    compile.arg("-std=c++11");
    if !is_clang {
        compile.args(["-finput-charset=latin1", "-fexec-charset=latin1"]);
    }
    let status = compile
        .args(["harness.cpp", "-o", "harness"])
        .current_dir(dir)
        .output()
        .expect("Failed to run the C++ compiler");

    if !status.status.success() {
        panic!(
            "Generated code failed to compile!\n\ngenerated:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&generated),
            String::from_utf8_lossy(&status.stderr)
        );
    }

    let run = Command::new(dir.join("harness"))
        .output()
        .expect("Failed to run the compiled harness");
    assert!(run.status.success());

    let expected: Vec<Vec<u8>> = assets
        .iter()
        .flat_map(|a| [a.key.as_bytes().to_vec(), a.content.clone()])
        .collect();
    assert_eq!(parse_entries(&run.stdout), expected);
}

#[test]
fn test_every_byte_value_compiles_back() {
    let all: Vec<u8> = (0..=255).collect();
    let mut reversed = all.clone();
    reversed.reverse();

    assert_round_trips_through_compiler(&[
        asset("root/all.bin", &all, 1),
        asset("root/reversed.bin", &reversed, 2),
    ]);
}

#[test]
fn test_hex_escape_boundaries_compile_back() {
    assert_round_trips_through_compiler(&[
        asset("root/hex.txt", b"\x01a\x1bF\x000\x1f9\x01g\x02\x03", 0),
        asset("root/tail.txt", b"\x1f", 0),
    ]);
}

#[test]
fn test_trigraphs_and_quotes_compile_back() {
    assert_round_trips_through_compiler(&[
        asset("root/trigraph.js", b"??= ??/ ??' ??( ??) ??! ??< ??> ??- ???", 10),
        asset(
            "root/quotes.css",
            b"\\\\\\\"\"\"\\\n\\\"?\\??\"\n\n",
            -5,
        ),
    ]);
}

#[test]
fn test_awkward_keys_and_empty_content_compile_back() {
    assert_round_trips_through_compiler(&[
        asset("root/we\"ird?\\.js", b"x", 1000),
        asset("root/sub/??=.html", b"", 0),
        asset("root/empty.css", b"", 0),
    ]);
}
