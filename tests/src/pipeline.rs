mod loading;
mod scenarios;
