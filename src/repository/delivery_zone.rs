use diesel::prelude::*;

use crate::{
    domain::delivery_zone::{
        DeliveryZone as DomainDeliveryZone, NewDeliveryZone as DomainNewDeliveryZone,
    },
    models::delivery_zone::{DeliveryZone as DbDeliveryZone, NewDeliveryZone as DbNewDeliveryZone},
    repository::errors::RepositoryResult,
    repository::{DeliveryZoneReader, DeliveryZoneWriter, DieselRepository},
};

impl DeliveryZoneReader for DieselRepository {
    fn get_active_zone_by_name(&self, name: &str) -> RepositoryResult<Option<DomainDeliveryZone>> {
        use crate::schema::delivery_zones;

        let mut conn = self.conn()?;
        let zone = delivery_zones::table
            .filter(delivery_zones::name.eq(name))
            .filter(delivery_zones::is_active.eq(true))
            .first::<DbDeliveryZone>(&mut conn)
            .optional()?;

        Ok(zone.map(Into::into))
    }
}

impl DeliveryZoneWriter for DieselRepository {
    fn create_delivery_zone(
        &self,
        new_zone: &DomainNewDeliveryZone,
    ) -> RepositoryResult<DomainDeliveryZone> {
        use crate::schema::delivery_zones;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(delivery_zones::table)
            .values(&DbNewDeliveryZone::from(new_zone))
            .get_result::<DbDeliveryZone>(&mut conn)?;

        Ok(created.into())
    }
}
