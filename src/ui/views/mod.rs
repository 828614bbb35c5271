pub mod complete;
pub mod dialogs;
pub mod explain;
pub mod landing;
pub mod loading;
pub mod quiz;
