mod cors;
mod lifecycle;
mod routes;
