pub mod word_diff;
