pub mod action;
pub mod bootstrap;
pub mod clear;
pub mod db_check;
pub mod dispatch;
pub mod recent;
pub mod record;
pub mod status;
pub mod sync;
