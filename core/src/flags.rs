//! Numeric launch flag bits.
//!
//! Values match the platform's intent flag constants so that a flags word
//! produced here can be handed to the launcher unchanged. Receiver flags share
//! bit positions with activity flags; which meaning applies depends on the
//! component type being launched.

pub const FLAG_GRANT_READ_URI_PERMISSION: u32 = 0x0000_0001;
pub const FLAG_GRANT_WRITE_URI_PERMISSION: u32 = 0x0000_0002;
pub const FLAG_DEBUG_LOG_RESOLUTION: u32 = 0x0000_0008;
pub const FLAG_EXCLUDE_STOPPED_PACKAGES: u32 = 0x0000_0010;
pub const FLAG_INCLUDE_STOPPED_PACKAGES: u32 = 0x0000_0020;
pub const FLAG_GRANT_PERSISTABLE_URI_PERMISSION: u32 = 0x0000_0040;
pub const FLAG_GRANT_PREFIX_URI_PERMISSION: u32 = 0x0000_0080;
pub const FLAG_ACTIVITY_MATCH_EXTERNAL: u32 = 0x0000_0800;

pub const FLAG_ACTIVITY_TASK_ON_HOME: u32 = 0x0000_4000;
pub const FLAG_ACTIVITY_CLEAR_TASK: u32 = 0x0000_8000;
pub const FLAG_ACTIVITY_NO_ANIMATION: u32 = 0x0001_0000;
pub const FLAG_ACTIVITY_REORDER_TO_FRONT: u32 = 0x0002_0000;
pub const FLAG_ACTIVITY_NO_USER_ACTION: u32 = 0x0004_0000;
pub const FLAG_ACTIVITY_CLEAR_WHEN_TASK_RESET: u32 = 0x0008_0000;
pub const FLAG_ACTIVITY_LAUNCHED_FROM_HISTORY: u32 = 0x0010_0000;
pub const FLAG_ACTIVITY_RESET_TASK_IF_NEEDED: u32 = 0x0020_0000;
pub const FLAG_ACTIVITY_BROUGHT_TO_FRONT: u32 = 0x0040_0000;
pub const FLAG_ACTIVITY_EXCLUDE_FROM_RECENTS: u32 = 0x0080_0000;
pub const FLAG_ACTIVITY_PREVIOUS_IS_TOP: u32 = 0x0100_0000;
pub const FLAG_ACTIVITY_MULTIPLE_TASK: u32 = 0x0800_0000;
pub const FLAG_ACTIVITY_NEW_TASK: u32 = 0x1000_0000;
pub const FLAG_ACTIVITY_SINGLE_TOP: u32 = 0x2000_0000;
pub const FLAG_ACTIVITY_CLEAR_TOP: u32 = 0x0400_0000;
pub const FLAG_ACTIVITY_NO_HISTORY: u32 = 0x4000_0000;

pub const FLAG_RECEIVER_NO_ABORT: u32 = 0x0800_0000;
pub const FLAG_RECEIVER_FOREGROUND: u32 = 0x1000_0000;
pub const FLAG_RECEIVER_REPLACE_PENDING: u32 = 0x2000_0000;
pub const FLAG_RECEIVER_REGISTERED_ONLY: u32 = 0x4000_0000;
