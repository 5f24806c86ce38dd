//! generate_filelist: write the relative paths of files matching a glob to a filelist.

use anyhow::Result;

fn main() -> Result<()> {
    filelist::cli::run()
}
