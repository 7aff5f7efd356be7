use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=BIBLE_STORE_ROOT_HINT");
    println!("cargo:rerun-if-changed=data/books.json");
    println!("cargo:rerun-if-changed=schema/books.schema.json");

    let hint = env::var("BIBLE_STORE_ROOT_HINT").ok();

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=BIBLE_STORE_ROOT_HINT={}",
            canonical.display()
        );
    }
}
