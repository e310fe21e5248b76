//! Testing utilities for the comanda workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use comanda_model::{Camion, Camionero, Cliente, Comanda, Estado, LineItem, Producto, Rubro, Ruta};
use proptest::prelude::*;

pub fn estado_pendiente() -> Estado {
    Estado::new("e-pendiente", "Pendiente").with_orden(1)
}

pub fn estado_en_preparacion() -> Estado {
    Estado::new("e-preparacion", "En preparación").with_orden(2)
}

pub fn estado_en_distribucion() -> Estado {
    Estado::new("e-distribucion", "En distribución").with_orden(5)
}

pub fn estado_entregada() -> Estado {
    Estado::new("e-entregada", "Entregada").with_orden(6)
}

pub fn yerba() -> Producto {
    Producto::new("p-yerba", "Yerba")
        .with_presentacion("1kg")
        .with_rubro(Rubro::new("r-almacen", "Almacén"))
}

pub fn lavandina() -> Producto {
    Producto::new("p-lavandina", "Lavandina")
        .with_presentacion("2L")
        .with_rubro(Rubro::new("r-limpieza", "Limpieza"))
}

pub fn cliente_en_ruta(id: &str, razonsocial: &str, ruta: &str) -> Cliente {
    Cliente::new(id, razonsocial).with_ruta(Ruta::new(format!("ruta-{ruta}"), ruta))
}

/// Order with one product line
pub fn create_comanda(id: &str, numero: u64, cliente: Cliente, cantidad: f64) -> Comanda {
    Comanda::new(id)
        .with_numero(numero)
        .with_cliente(cliente)
        .with_item(LineItem::new(yerba(), cantidad))
}

/// A small but varied day of orders
pub fn sample_comandas() -> Vec<Comanda> {
    vec![
        create_comanda("a1", 1001, cliente_en_ruta("c1", "Almacén Don Pepe", "Norte"), 3.0)
            .with_estado(estado_pendiente()),
        create_comanda("a2", 1002, cliente_en_ruta("c2", "Kiosco Central", "Sur"), 2.0)
            .with_item(LineItem::new(lavandina(), 6.0))
            .with_estado(estado_en_preparacion())
            .with_camion(Camion::new("t1", "Iveco 1").with_patente("AB123CD")),
        create_comanda("a3", 1003, cliente_en_ruta("c1", "Almacén Don Pepe", "Norte"), 1.0)
            .with_estado(estado_en_distribucion())
            .with_camion(Camion::new("t1", "Iveco 1"))
            .with_camionero(Camionero::new("d1", "Juan Pérez"))
            .with_punto_distribucion("Depósito Norte"),
        Comanda::new("a4").with_numero(1004),
    ]
}

/// Orders whose statuses are numbered in tens, so `orden` never matches the
/// catalog position
pub fn dispatched_comandas() -> Vec<Comanda> {
    vec![
        create_comanda("b1", 2001, cliente_en_ruta("c1", "Almacén Don Pepe", "Norte"), 4.0)
            .with_estado(Estado::new("e-pendiente", "Pendiente").with_orden(10)),
        create_comanda("b2", 2002, cliente_en_ruta("c2", "Kiosco Central", "Sur"), 1.0)
            .with_estado(Estado::new("e-distribucion", "En distribución").with_orden(50)),
        create_comanda("b3", 2003, cliente_en_ruta("c2", "Kiosco Central", "Sur"), 2.0)
            .with_estado(Estado::new("e-entregada", "Entregada").with_orden(60)),
    ]
}

fn arb_cliente() -> impl Strategy<Value = Option<Cliente>> {
    prop::option::of((0..4u8, prop::option::of(0..3u8)).prop_map(|(c, r)| {
        let cliente = Cliente::new(format!("c{c}"), format!("Cliente {c}"));
        match r {
            Some(r) => cliente.with_ruta(Ruta::new(format!("r{r}"), format!("Ruta {r}"))),
            None => cliente,
        }
    }))
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (0..3u8, 0..3u8, 0..50u32).prop_map(|(p, r, cantidad)| {
        let producto = Producto::new(format!("p{p}"), format!("Producto {p}"))
            .with_rubro(Rubro::new(format!("rb{r}"), format!("Rubro {r}")));
        LineItem::new(producto, f64::from(cantidad))
    })
}

/// Arbitrary order with small id spaces so groups collide
pub fn arb_comanda() -> impl Strategy<Value = Comanda> {
    (
        0..1000u64,
        prop::option::of(1..20u64),
        arb_cliente(),
        prop::option::of(0..3u8),
        prop::option::of(0..3u8),
        prop::option::of(0..3u8),
        prop::option::of("[A-Z][a-z]{0,6}"),
        prop::collection::vec(arb_item(), 0..4),
    )
        .prop_map(|(id, numero, cliente, camion, camionero, estado, punto, items)| {
            let mut comanda = Comanda::new(format!("o{id}"));
            comanda.nrodecomanda = numero;
            comanda.codcli = cliente.map(Into::into);
            comanda.camion =
                camion.map(|t| Camion::new(format!("t{t}"), format!("Camión {t}")).into());
            comanda.camionero =
                camionero.map(|d| Camionero::new(format!("d{d}"), format!("Chofer {d}")).into());
            comanda.codestado = estado.map(|e| {
                Estado::new(format!("e{e}"), format!("Estado {e}"))
                    .with_orden(i64::from(e))
                    .into()
            });
            comanda.punto_distribucion = punto;
            comanda.items = items;
            comanda
        })
}
