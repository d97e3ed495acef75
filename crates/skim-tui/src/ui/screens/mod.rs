mod viewer;

pub use viewer::ViewerScreen;
