use std::io::Write;
use std::path::{Path, PathBuf};

use betonmix::MixTable;
use betonmix_data::MixTableRecord;

fn main() {
    let lib_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("betonmix-lib")
        .join("data");

    let mut args = std::env::args_os().skip(1);
    let in_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| lib_dir.join("mix_table.dat"));
    let out_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| lib_dir.join("mix_table.bin.zst"));

    if !in_path.exists() {
        eprintln!("Error: mix table source not found at {:?}", in_path);
        eprintln!("Usage: betonmix-generate [INPUT.dat] [OUTPUT.bin.zst]");
        std::process::exit(1);
    }

    println!("Parsing mix table from {:?}...", in_path);
    let text = std::fs::read_to_string(&in_path).expect("failed to read mix table source");
    let table = match MixTable::parse(&text) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let record = table.to_records();
    let profiles: usize = record.grades.iter().map(|g| g.profiles.len()).sum();
    println!("  Version: {}", record.version);
    println!("  Grades: {} entries", record.grades.len());
    println!("  Cement profiles: {} entries", profiles);

    println!("\nSerializing with postcard...");
    let serialized = postcard::to_allocvec(&record).expect("postcard serialization failed");
    println!("  Serialized size: {} bytes", serialized.len());

    println!("Compressing with zstd (level 19)...");
    let compressed = zstd::encode_all(&serialized[..], 19).expect("zstd compression failed");
    println!("  Compressed size: {} bytes", compressed.len());
    println!(
        "  Compression ratio: {:.1}x",
        serialized.len() as f64 / compressed.len() as f64
    );

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut f = std::fs::File::create(&out_path).expect("failed to create output file");
    f.write_all(&compressed)
        .expect("failed to write compressed data");

    println!("\nWrote {:?}", out_path);

    println!("Verifying round-trip deserialization...");
    let decompressed = zstd::decode_all(&compressed[..]).expect("zstd decompression failed");
    assert_eq!(decompressed.len(), serialized.len());
    let record2: MixTableRecord =
        postcard::from_bytes(&decompressed).expect("postcard deserialization failed");
    assert_eq!(record2, record);
    MixTable::from_compressed(&compressed).expect("library failed to load the blob");
    println!("  Round-trip OK!");
}
