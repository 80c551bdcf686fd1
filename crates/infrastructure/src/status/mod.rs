pub mod snapshot_files;

pub use snapshot_files::JsonSnapshotFiles;
