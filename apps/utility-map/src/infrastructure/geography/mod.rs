pub mod feature_collection;
