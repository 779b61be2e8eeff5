use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=style/tailwind.css");

    // Ensure the target directory exists
    let site_pkg_dir = Path::new("target/site/pkg");
    if !site_pkg_dir.exists() {
        fs::create_dir_all(site_pkg_dir).expect("Failed to create site/pkg directory");
    }

    // Copy the compiled stylesheet if cargo-leptos left one behind
    let css_source = Path::new("target/tmp/tailwind.css");
    let css_dest = site_pkg_dir.join("cinelist.css");

    if css_source.exists() {
        fs::copy(css_source, &css_dest).expect("Failed to copy CSS file");
        println!("Copied CSS from {:?} to {:?}", css_source, css_dest);
    } else {
        println!("Source CSS file not found at {:?}", css_source);
    }

    // Copy favicon to site root
    let favicon_source = Path::new("public/favicon.ico");
    let favicon_dest = Path::new("target/site/favicon.ico");

    if favicon_source.exists() {
        fs::copy(favicon_source, favicon_dest).expect("Failed to copy favicon file");
        println!("Copied favicon to site root");
    } else {
        println!("Favicon not found at {:?}", favicon_source);
    }
}
