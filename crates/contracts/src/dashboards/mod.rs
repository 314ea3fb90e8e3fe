pub mod d400_shipment_summary;
