use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    // The bundle is embedded with `include_dir!`, so the directory must exist
    // even before the frontend has been built.
    if out_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
    }
    if let Err(e) = fs::create_dir_all(out_dir) {
        panic!("could not create {}: {}", out_dir.display(), e);
    }

    if dist_dir.exists() {
        let options = fs_extra::dir::CopyOptions::new()
            .overwrite(true)
            .content_only(true);
        if let Err(e) = fs_extra::dir::copy(dist_dir, out_dir, &options) {
            panic!("could not copy frontend bundle: {}", e);
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
