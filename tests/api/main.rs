mod demo;
mod helpers;
mod shared_directory;
