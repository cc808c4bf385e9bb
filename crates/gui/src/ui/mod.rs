pub mod model_tree;
pub mod slice_tool;
pub mod status_bar;
pub mod tour_features;
