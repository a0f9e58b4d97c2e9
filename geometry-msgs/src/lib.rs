//! Message types of the `geometry_msgs` ROS package.
//!
//! Only the messages consumed by `geometry-util` are defined here. Field names and types follow the `.msg`
//! definitions, so values serialized by a bridge (e.g. rosbridge JSON) deserialize into these structs directly.

pub mod msg;
