use diesel::prelude::*;

use crate::{
    domain::address::{Address as DomainAddress, NewAddress as DomainNewAddress},
    models::address::{Address as DbAddress, NewAddress as DbNewAddress},
    repository::errors::RepositoryResult,
    repository::{AddressReader, AddressWriter, DieselRepository},
};

impl AddressReader for DieselRepository {
    fn get_address_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<DomainAddress>> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;
        let address = addresses::table
            .filter(addresses::id.eq(id))
            .filter(addresses::user_id.eq(user_id))
            .first::<DbAddress>(&mut conn)
            .optional()?;

        Ok(address.map(Into::into))
    }
}

impl AddressWriter for DieselRepository {
    fn create_address(&self, new_address: &DomainNewAddress) -> RepositoryResult<DomainAddress> {
        use crate::schema::addresses;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(addresses::table)
            .values(&DbNewAddress::from(new_address))
            .get_result::<DbAddress>(&mut conn)?;

        Ok(created.into())
    }
}
