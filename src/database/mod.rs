pub mod assert;

use crate::DbPool;
use actix_web::web;
use diesel::{
    r2d2::ConnectionManager,
    sql_types::{Bigint, Unsigned},
    MysqlConnection, QueryResult, RunQueryDsl,
};
use r2d2::PooledConnection;

no_arg_sql_function!(
    last_insert_id,
    Unsigned<Bigint>,
    "Represents the MySQL LAST_INSERT_ID() function"
);

pub type DbConn = PooledConnection<ConnectionManager<MysqlConnection>>;

pub fn get_db_conn(pool: &web::Data<DbPool>) -> Result<DbConn, r2d2::Error> {
    pool.get()
}

/// Latest AUTO_INCREMENT key generated on this connection. MySQL keeps it across
/// statements, so only call it right after inserting into a table that has one.
pub fn get_last_insert_id(conn: &MysqlConnection) -> QueryResult<u64> {
    diesel::select(last_insert_id).get_result(conn)
}
