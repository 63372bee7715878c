//! Integration tests for the asset filesystem.
//!
//! These tests verify that:
//! 1. `AssetFile` honours the cursor and EOF contract of `FileAccess`
//! 2. Probes and exports never leak native handles
//! 3. Exported files match what bulk reads return
//! 4. The same code runs against in-memory and directory-backed bundles

use apkfs::*;
use std::sync::Arc;

// =============================================================================
// Fixtures
// =============================================================================

fn bundle() -> (Arc<MemoryAssets>, AssetContext) {
    let assets = Arc::new(MemoryAssets::new());
    assets.insert("data.bin", (0u8..10).collect::<Vec<_>>());
    assets.insert("empty.bin", Vec::new());
    assets.insert(
        "textures/grass.png",
        (0..4096u32).map(|i| (i * 7 % 251) as u8).collect::<Vec<_>>(),
    );
    let ctx = AssetContext::from_shared(assets.clone(), AssetFsConfig::default());
    (assets, ctx)
}

const EXISTING: &[(&str, u64)] = &[
    ("res://data.bin", 10),
    ("/data.bin", 10),
    ("data.bin", 10),
    ("res://empty.bin", 0),
    ("res://textures/grass.png", 4096),
    ("res://textures/../textures/./grass.png", 4096),
];

const MISSING: &[&str] = &[
    "res://nope.bin",
    "res://textures",
    "res://textures/grass.PNG",
    "user://data.bin",
];

// =============================================================================
// Open
// =============================================================================

#[test]
fn open_existing_reports_true_length() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    for &(path, len) in EXISTING {
        file.open(path, OpenFlags::READ).unwrap();
        assert!(file.is_open(), "{path}");
        assert_eq!(file.length(), len, "{path}");
        assert_eq!(file.position(), 0);
        assert!(!file.eof_reached());
    }
}

#[test]
fn open_missing_is_cannot_open() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    for &path in MISSING {
        let err = file.open(path, OpenFlags::READ).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CannotOpen, "{path}");
        assert!(!file.is_open());
    }
}

#[test]
fn open_for_write_is_always_unavailable() {
    let (assets, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    let modes = [
        OpenFlags::WRITE,
        OpenFlags::READ_WRITE,
        OpenFlags {
            append: true,
            ..OpenFlags::READ
        },
    ];
    for flags in modes {
        for path in ["res://data.bin", "res://nope.bin"] {
            let err = file.open(path, flags).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unavailable, "{path} {flags:?}");
        }
    }
    assert_eq!(assets.open_count(), 0);
}

// =============================================================================
// Seek / read
// =============================================================================

#[test]
fn seek_within_bounds() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::open_read(ctx, "res://data.bin").unwrap();
    for n in 0..=file.length() {
        file.seek(n);
        assert_eq!(file.position(), n);
        assert!(!file.eof_reached());
    }
}

#[test]
fn seek_past_end_clamps_and_sets_eof() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::open_read(ctx, "res://data.bin").unwrap();
    for k in [1u64, 2, 100, u64::MAX - 10] {
        file.seek(10 + k);
        assert_eq!(file.position(), 10);
        assert!(file.eof_reached());
        assert_eq!(file.error(), Some(ErrorKind::EndOfFile));
    }
}

#[test]
fn bulk_read_of_exact_length_then_one_more_byte() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::open_read(ctx, "res://textures/grass.png").unwrap();
    let len = file.length() as usize;
    let mut buf = vec![0u8; len];

    assert_eq!(file.read_buffer(&mut buf, len).unwrap(), len);
    assert_eq!(file.position(), len as u64);
    assert!(!file.eof_reached());

    assert_eq!(file.read_byte(), 0);
    assert!(file.eof_reached());
    assert_eq!(file.position(), len as u64);
}

#[test]
fn scenario_seek_then_overlong_read() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    file.open("res://data.bin", OpenFlags::READ).unwrap();
    assert_eq!(file.length(), 10);

    file.seek(5);
    assert_eq!(file.position(), 5);
    assert!(!file.eof_reached());

    let mut buf = [0u8; 10];
    assert_eq!(file.read_buffer(&mut buf, 10).unwrap(), 5);
    assert_eq!(&buf[..5], &[5, 6, 7, 8, 9]);
    assert_eq!(file.position(), 10);
    assert!(file.eof_reached());
}

#[test]
fn empty_asset_is_immediately_at_end() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::open_read(ctx, "res://empty.bin").unwrap();
    assert!(!file.eof_reached());
    assert_eq!(file.read_byte(), 0);
    assert!(file.eof_reached());
}

#[test]
#[should_panic]
fn reading_closed_handle_panics() {
    let (_, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    let mut buf = [0u8; 1];
    let _ = file.read_buffer(&mut buf, 1);
}

// =============================================================================
// Existence probes
// =============================================================================

#[test]
fn file_exists_matches_open() {
    let (assets, ctx) = bundle();
    let mut file = AssetFile::new(ctx.clone());
    for &(path, _) in EXISTING {
        assert!(file.file_exists(path), "{path}");
        assert!(ctx.exists(path));
        assert!(file.open(path, OpenFlags::READ).is_ok());
    }
    file.close();
    for &path in MISSING {
        assert!(!file.file_exists(path), "{path}");
    }
    assert_eq!(assets.open_handles(), 0);
}

#[test]
fn file_exists_is_not_cached() {
    let (assets, ctx) = bundle();
    assert!(!ctx.exists("res://late.bin"));
    assets.insert("late.bin", vec![1]);
    assert!(ctx.exists("res://late.bin"));
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn export_round_trip_matches_bulk_read() {
    let (assets, ctx) = bundle();
    let dir = tempfile::tempdir().unwrap();

    for &(path, len) in EXISTING {
        let dest = dir.path().join("out.bin");
        assert_eq!(export_to_file(&ctx, path, &dest).unwrap(), len);

        let mut file = AssetFile::open_read(ctx.clone(), path).unwrap();
        let mut expected = vec![0u8; len as usize];
        assert_eq!(file.read_buffer(&mut expected, len as usize).unwrap(), len as usize);

        assert_eq!(std::fs::read(&dest).unwrap(), expected, "{path}");
    }
    assert_eq!(assets.open_handles(), 0);
}

#[test]
fn export_leaves_callers_handle_alone() {
    let (assets, ctx) = bundle();
    let dir = tempfile::tempdir().unwrap();

    let mut file = AssetFile::open_read(ctx.clone(), "res://data.bin").unwrap();
    file.seek(4);
    export_to_file(&ctx, "res://textures/grass.png", dir.path().join("g.png")).unwrap();

    assert!(file.is_open());
    assert_eq!(assets.open_handles(), 1);
    assert_eq!(file.read_byte(), 4);
}

#[test]
fn save_to_file_matches_export() {
    let (_, ctx) = bundle();
    let dir = tempfile::tempdir().unwrap();
    let exported = dir.path().join("exported.png");
    let saved = dir.path().join("saved.png");

    export_to_file(&ctx, "res://textures/grass.png", &exported).unwrap();
    let mut file = AssetFile::open_read(ctx, "res://textures/grass.png").unwrap();
    assert_eq!(file.save_to_file(&saved).unwrap(), 4096);

    assert_eq!(std::fs::read(saved).unwrap(), std::fs::read(exported).unwrap());
}

// =============================================================================
// Directory-backed bundle
// =============================================================================

#[test]
fn directory_bundle_behaves_like_memory_bundle() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("levels")).unwrap();
    std::fs::write(dir.path().join("levels/one.map"), (0u8..10).collect::<Vec<_>>()).unwrap();

    let ctx = AssetContext::new(DirAssets::new(dir.path()));
    let mut file = AssetFile::open_read(ctx.clone(), "res://levels/one.map").unwrap();
    file.seek(5);
    let mut buf = [0u8; 10];
    let mut total = 0;
    while total < 5 {
        let n = file.read_buffer(&mut buf[total..], 10 - total).unwrap();
        assert!(n > 0);
        total += n;
    }
    assert_eq!(&buf[..5], &[5, 6, 7, 8, 9]);
    assert_eq!(file.position(), 10);
    assert!(file.eof_reached());

    assert!(ctx.exists("/levels/one.map"));
    assert!(!ctx.exists("/levels"));
}

// =============================================================================
// Filesystem root
// =============================================================================

fn read_all<R: AssetRead + ?Sized>(root: &R, path: &str) -> Result<Vec<u8>, AssetFsError> {
    let mut reader = root.open_read(path)?;
    let mut data = Vec::new();
    std::io::Read::read_to_end(&mut reader, &mut data)?;
    Ok(data)
}

#[test]
fn asset_fs_reads_match_handle_reads() {
    let (_, ctx) = bundle();
    let fs = AssetFs::new(ctx);

    let whole = fs.read("res://textures/grass.png").unwrap();
    assert_eq!(whole.len(), 4096);
    assert_eq!(read_all(&fs, "res://textures/grass.png").unwrap(), whole);
    assert_eq!(
        fs.read_range("res://textures/grass.png", 100, 50).unwrap(),
        whole[100..150].to_vec()
    );
    assert_eq!(fs.file_size("res://textures/grass.png").unwrap(), 4096);
    assert!(fs.is_file("res://data.bin"));
    assert!(!fs.is_file("res://nope.bin"));
}

#[test]
fn dyn_root_works() {
    let (_, ctx) = bundle();
    let root: Box<dyn AssetRead> = Box::new(AssetFs::new(ctx));
    assert_eq!(read_all(root.as_ref(), "data.bin").unwrap().len(), 10);
    assert!(read_all(root.as_ref(), "nope.bin").is_err());
}

// =============================================================================
// Generic callers
// =============================================================================

fn checksum<F: FileAccess>(file: &mut F, path: &str) -> Result<u32, AssetFsError> {
    file.open(path, OpenFlags::READ)?;
    let mut sum = 0u32;
    while file.position() < file.length() {
        sum = sum.wrapping_add(u32::from(file.read_byte()));
    }
    file.close();
    Ok(sum)
}

#[test]
fn generic_file_access_caller() {
    let (assets, ctx) = bundle();
    let mut file = AssetFile::new(ctx);
    assert_eq!(checksum(&mut file, "res://data.bin").unwrap(), 45);
    assert!(checksum(&mut file, "res://nope.bin").is_err());
    assert_eq!(assets.open_handles(), 0);
}
