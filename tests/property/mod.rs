mod breadcrumbs;
mod classification;
mod path_normalization;
