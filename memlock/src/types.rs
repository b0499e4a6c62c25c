/// Resource limit identifiers used with `set_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RlimitResource {
    /// Maximum size of the process's data segment (heap).
    Data,

    /// Maximum size of a core file.
    Core,

    /// Maximum size that may be locked into memory.
    MemLock,

    /// Maximum number of open files.
    NoFile,

    /// Maximum size of the process's stack segment.
    Stack,
}
