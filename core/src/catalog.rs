// giftlist_core/src/catalog.rs

//! The fixed registry catalog and the startup seeder.

use tracing::{error, info, instrument};

use crate::error::Result;
use crate::models::NewProduct;
use crate::store::Store;

/// What the seeder did on this startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
  /// The product table already had rows; nothing was inserted.
  Skipped { existing: i64 },
  Seeded { inserted: usize, failed: usize },
}

fn product(
  product_name: &str,
  price: f64,
  stock: i64,
  sku: &str,
  brand: &str,
  description: &str,
  image: &str,
) -> NewProduct {
  NewProduct {
    product_name: product_name.to_string(),
    price,
    stock,
    sku: Some(sku.to_string()),
    brand: Some(brand.to_string()),
    description: Some(description.to_string()),
    image: Some(image.to_string()),
  }
}

/// The registry's products, in display order. Used both for seeding and for document-store uploads.
pub fn seed_products() -> Vec<NewProduct> {
  vec![
    product("Zaino Mustela", 45.00, 1, "MU-001", "Mustela", "Contenuto: Fluido detergente senza risciaquo 300ml, Detergente delicato 200ml, Hydra bébè crema viso 40 ml, Pasta cambio 50ml.", "Zaino-Mustela.jpg"),
    product("Organizer passeggino", 25.00, 1, "MU-002", "Mustela", "Pratico organizer da agganciare al passeggino con tasche multiple per biberon, pannolini e accessori.", "Organizer-passeggino.jpg"),
    product("Scatola in latta Mustela", 15.00, 1, "MU-003", "Mustela", "Scatola in latta con design elegante, perfetta per confezionare piccoli regali.", "Scatola-in-latta.jpg"),
    product("Set Mustela crema solare con borsa frigo", 25.00, 1, "MU-004", "Mustela", "Mustela Kit Solare per tutta la famiglia.", "Mustela-borsa-frigo.jpg"),
    product("Bagno corpo Mustela da 150 ml", 18.00, 1, "MU-005", "Mustela", "Detergente Delicato Corpo e Capelli.", "Bagno-corpo-Mustela.jpg"),
    product("Mustela acqua detergente 300ml", 14.00, 1, "MU-006", "Mustela", "Acqua detergente con avocado biologico.", "Mustela acqua.jpg"),
    product("Stick Mustela labbra", 7.00, 0, "MU-007", "Mustela", "Protezione e nutrimento per labbra e zigomi.", "Stick-labbra.jpg"),
    product("Crema solare 50+", 19.00, 1, "MU-008", "BioNike", "Offre una tripla fotoprotezione dai raggi UVA-UVB.", "Crema-solare-50plus.jpg"),
    product("Repellente zanzare", 13.00, 1, "MU-009", "Mustela", "Durata fino a 8 ore di protezione contro zanzare.", "Mustela zanzare.jpg"),
    product("Dissuasore zanzare portatile", 15.00, 1, "CH-001", "Chicco", "Dispositivo antizanzare portatile con ultrasuoni.", "Dissuasore.jpg"),
    product("Zanzariera Chicco per passeggino", 10.00, 1, "CH-002", "Chicco", "Zanzariera Chicco utilissima per proteggere il passeggino.", "Zanzariera-Chicco.jpg"),
    product("Fascia porta bimbo Chicco", 70.00, 1, "CH-003", "Chicco", "Chicco Boppy Comfyfit Portabebè BL.", "Fascia-porta-bimbo.jpg"),
    product("Giostrina Next to Dreams Chicco", 35.00, 1, "CH-004", "Chicco", "Giostrina musicale progettata per adattarsi alla culla Next2Me.", "Giostrina-Chicco.png"),
    product("Giraffa Chicco", 20.00, 1, "CH-005", "Chicco", "Fune Passeggio Mrs Giraffa realizzata in morbido tessuto.", "Chicco-Giraffa.jpg"),
    product("Set igiene panda", 10.00, 1, "CH-006", "Chicco", "Kit completo per l'igiene e la cura delle unghie dei bambini.", "Set-igiene-panda.jpg"),
    product("Set spazzola e pettine Chicco", 10.00, 1, "CH-007", "Chicco", "Set spazzola e pettine Chicco per la cura delicata dei capelli.", "Set-spazzola-chicco.jpg"),
    product("Carillon Chicco a forma di luna", 15.00, 1, "CH-008", "Chicco", "Carillon Chicco a forma di luna con melodie rilassanti.", "Carillon-Chicco.jpg"),
    product("Massaggia gengive Chicco refrigerante", 10.00, 1, "CH-009", "Chicco", "Massaggia gengive Chicco refrigerante per la dentizione.", "Massaggia-gengive.jpg"),
    product("Chicco Gioco Orsetto Sweet Heart Rosa", 25.00, 1, "CH-010", "Chicco", "L'Orsetto Sweet Heart di Chicco è un tenero compagno.", "Orso-proiettore-luce.jpg"),
    product("Set dentifricio spazzolino Chicco", 10.00, 1, "CH-011", "Chicco", "Set Primi Dentini di Chicco con custodia e cerniera.", "Set-dentifricio-spazzolino.jpg"),
    product("Gel gengivale Chicco + massaggia gengive da dito", 13.00, 1, "CH-012", "Chicco", "Set per l'igiene orale dei bambini indicato dai 4m+.", "set-gengive.jpg"),
    product("Dentinale", 13.00, 1, "CH-013", "Prodotto farmaceutico", "DENTINALE pasta gengivale per il trattamento dei dolori alle gengive.", "dentinale.jpg"),
    product("Seggiolino auto Chicco Quizy", 95.00, 0, "CH-014", "Chicco", "Rialzo auto con schienale ultra-leggero.", "Seggiolino-Chicco.jpg"),
    product("Seggiolino auto Chicco Fold & Go", 170.00, 1, "CH-015", "Chicco", "Seggiolino auto chicco che accompagnerà il tuo bambino.", "Seggiolino-Chicco2.png"),
  ]
}

/// Inserts `products` if and only if the store currently holds no products.
///
/// Records are inserted one by one; a failed insert is logged and the rest still go in.
/// An error is returned only when the initial count fails.
#[instrument(name = "catalog::seed", skip(store, products), fields(candidates = products.len()))]
pub async fn seed_catalog(store: &dyn Store, products: &[NewProduct]) -> Result<SeedOutcome> {
  let existing = store.count_products().await.map_err(|e| {
    error!("Failed to count products before seeding: {}", e);
    e
  })?;

  if existing > 0 {
    info!("Catalog already holds {} products; seeding skipped.", existing);
    return Ok(SeedOutcome::Skipped { existing });
  }

  info!("Empty catalog, inserting {} default products...", products.len());
  let mut inserted = 0;
  let mut failed = 0;
  for product in products {
    match store.insert_product(product).await {
      Ok(_) => inserted += 1,
      Err(e) => {
        error!(product_name = %product.product_name, "Failed to insert seed product: {}", e);
        failed += 1;
      }
    }
  }

  info!("Catalog seeding finished: {} inserted, {} failed.", inserted, failed);
  Ok(SeedOutcome::Seeded { inserted, failed })
}
