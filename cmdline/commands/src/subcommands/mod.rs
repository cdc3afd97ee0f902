mod list;
mod scene_file;
mod selection;
mod timeline;
mod run_keyframe_command;

pub (super) use self::list::*;
pub (super) use self::scene_file::*;
pub (super) use self::selection::*;
pub (super) use self::timeline::*;
pub (super) use self::run_keyframe_command::*;
