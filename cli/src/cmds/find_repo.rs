use std::path::Path;

use rslet_core::repo::Result;
use rslet_core::Repository;
use rslet_on_disk::OnDiskRepo;

// Open the repository whose `.rslet` directory sits directly inside `path`.
//
// Unlike git, rslet does not search parent directories: commands must run
// at the top of the working tree.
pub(crate) fn from_path<P: AsRef<Path>>(path: P) -> Result<Repository<OnDiskRepo>> {
    rslet_on_disk::open(path.as_ref())
}
