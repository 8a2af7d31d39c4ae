mod bootstrap;
mod runs;
