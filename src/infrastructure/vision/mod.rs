pub mod captioner;
